//! Interactive menu, used when the binary runs without a subcommand.
//!
//! Every action goes through the repository; this module only prompts and
//! renders. The collection is saved once more on exit.

use super::task::print_filtered;
use crate::{
    db::tasks::{NewTask, Tasks},
    libs::{
        messages::Message,
        task::{TaskFilter, DEFAULT_PRIORITY, MAX_PRIORITY, MIN_PRIORITY},
    },
    msg_error, msg_print, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Clone, Copy)]
enum MenuAction {
    AddTask,
    ViewAll,
    ViewByPriority,
    ViewByCategory,
    MarkCompleted,
    DeleteTask,
    Search,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 8] = [
        MenuAction::AddTask,
        MenuAction::ViewAll,
        MenuAction::ViewByPriority,
        MenuAction::ViewByCategory,
        MenuAction::MarkCompleted,
        MenuAction::DeleteTask,
        MenuAction::Search,
        MenuAction::Exit,
    ];

    fn label(self) -> Message {
        match self {
            MenuAction::AddTask => Message::MenuAddTask,
            MenuAction::ViewAll => Message::MenuViewAll,
            MenuAction::ViewByPriority => Message::MenuViewByPriority,
            MenuAction::ViewByCategory => Message::MenuViewByCategory,
            MenuAction::MarkCompleted => Message::MenuMarkCompleted,
            MenuAction::DeleteTask => Message::MenuDeleteTask,
            MenuAction::Search => Message::MenuSearch,
            MenuAction::Exit => Message::MenuExit,
        }
    }
}

pub fn cmd(tasks: &mut Tasks) -> Result<()> {
    let labels: Vec<String> = MenuAction::ALL.iter().map(|action| action.label().to_string()).collect();

    loop {
        msg_print!(Message::MenuTitle, true);
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMenuChoice.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuAction::ALL[choice] {
            MenuAction::AddTask => add_task(tasks)?,
            MenuAction::ViewAll => print_filtered(tasks, TaskFilter::All),
            MenuAction::ViewByPriority => print_filtered(tasks, TaskFilter::Priority(prompt_priority()?)),
            MenuAction::ViewByCategory => {
                let category = prompt_text(Message::PromptCategory, false)?;
                print_filtered(tasks, TaskFilter::Category(category));
            }
            MenuAction::MarkCompleted => {
                let id = prompt_text(Message::PromptTaskId, false)?;
                if tasks.mark_task_completed(id.trim())? {
                    msg_success!(Message::TaskCompleted);
                } else {
                    msg_error!(Message::TaskNotFoundWithId(id));
                }
            }
            MenuAction::DeleteTask => {
                let id = prompt_text(Message::PromptTaskId, false)?;
                if tasks.delete_task(id.trim())? {
                    msg_success!(Message::TaskDeleted);
                } else {
                    msg_error!(Message::TaskNotFoundWithId(id));
                }
            }
            MenuAction::Search => {
                let query = prompt_text(Message::PromptSearchQuery, true)?;
                print_filtered(tasks, TaskFilter::Search(query));
            }
            MenuAction::Exit => {
                msg_print!(Message::SavingAndExiting, true);
                tasks.save_tasks()?;
                msg_print!(Message::Goodbye);
                return Ok(());
            }
        }
    }
}

fn add_task(tasks: &mut Tasks) -> Result<()> {
    let title = prompt_text(Message::PromptTaskTitle, true)?;
    let description = prompt_text(Message::PromptTaskDescription, true)?;
    let priority = prompt_priority()?;
    let due = prompt_text(Message::PromptDueDate, true)?;
    let categories = prompt_text(Message::PromptCategories, true)?;

    let mut new_task = NewTask::new(title.trim()).description(&description).priority(priority);
    if !due.trim().is_empty() {
        new_task = new_task.due_date(due.trim());
    }
    for category in categories.split(',') {
        new_task = new_task.category(category);
    }

    match tasks.add_task(new_task) {
        Ok(id) => msg_success!(Message::TaskCreated(id), true),
        Err(e) if e.is_invalid_argument() => msg_error!(Message::InvalidTask(e.to_string())),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn prompt_priority() -> Result<u8> {
    let priority = Input::<u8>::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .default(DEFAULT_PRIORITY)
        .validate_with(|p: &u8| -> Result<(), String> {
            if (MIN_PRIORITY..=MAX_PRIORITY).contains(p) {
                Ok(())
            } else {
                Err(Message::PriorityRange.to_string())
            }
        })
        .interact_text()?;
    Ok(priority)
}

fn prompt_text(prompt: Message, allow_empty: bool) -> Result<String> {
    let value = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty(allow_empty)
        .interact_text()?;
    Ok(value)
}
