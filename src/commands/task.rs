use crate::{
    db::tasks::{NewTask, Tasks},
    libs::{
        messages::Message,
        task::{TaskFilter, DEFAULT_PRIORITY},
        view::View,
    },
    msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Longer description
    #[arg(short, long, default_value = "")]
    description: String,
    /// Priority from 1 (highest) to 5
    #[arg(short, long, default_value_t = DEFAULT_PRIORITY)]
    priority: u8,
    /// Due date in YYYY-MM-DD format
    #[arg(long)]
    due: Option<String>,
    /// Category tag, may be repeated
    #[arg(short, long = "category")]
    categories: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only tasks with this priority
    #[arg(short, long, conflicts_with = "category")]
    priority: Option<u8>,
    /// Only tasks with this category
    #[arg(short, long)]
    category: Option<String>,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Task ID
    id: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn add(tasks: &mut Tasks, args: AddArgs) -> Result<()> {
    let mut new_task = NewTask::new(&args.title).description(&args.description).priority(args.priority);
    if let Some(due) = &args.due {
        new_task = new_task.due_date(due);
    }
    new_task.categories = args.categories;

    match tasks.add_task(new_task) {
        Ok(id) => {
            msg_success!(Message::TaskCreated(id));
            Ok(())
        }
        Err(e) if e.is_invalid_argument() => msg_bail_anyhow!(Message::InvalidTask(e.to_string())),
        Err(e) => Err(e.into()),
    }
}

pub fn list(tasks: &Tasks, args: ListArgs) -> Result<()> {
    let filter = match (args.priority, args.category) {
        (Some(priority), _) => TaskFilter::Priority(priority),
        (None, Some(category)) => TaskFilter::Category(category),
        (None, None) => TaskFilter::All,
    };
    print_filtered(tasks, filter);
    Ok(())
}

pub fn show(tasks: &Tasks, args: IdArgs) -> Result<()> {
    match tasks.get_task(&args.id) {
        Some(task) => msg_print!(task),
        None => msg_error!(Message::TaskNotFoundWithId(args.id)),
    }
    Ok(())
}

pub fn done(tasks: &mut Tasks, args: IdArgs) -> Result<()> {
    if tasks.mark_task_completed(&args.id)? {
        msg_success!(Message::TaskCompleted);
    } else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
    }
    Ok(())
}

pub fn delete(tasks: &mut Tasks, args: DeleteArgs) -> Result<()> {
    let Some(task) = tasks.get_task(&args.id) else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
        return Ok(());
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    if tasks.delete_task(&args.id)? {
        msg_success!(Message::TaskDeleted);
    }
    Ok(())
}

/// Prints the tasks selected by `filter` under a matching header, or a notice if there are none.
pub fn print_filtered(tasks: &Tasks, filter: TaskFilter) {
    let (header, empty) = filter_messages(&filter);
    let found = tasks.fetch(filter);
    if found.is_empty() {
        msg_warning!(empty, true);
        return;
    }

    msg_print!(header, true);
    View::tasks(&found);
    msg_print!(Message::TaskCount(found.len()));
}

/// Header and empty-result notice for a listing.
fn filter_messages(filter: &TaskFilter) -> (Message, Message) {
    match filter {
        TaskFilter::All => (Message::TasksHeader, Message::NoTasksFound),
        TaskFilter::Priority(p) => (Message::TasksByPriorityHeader(*p), Message::NoTasksWithPriority(*p)),
        TaskFilter::Category(c) => {
            let category = c.to_lowercase();
            (Message::TasksByCategoryHeader(category.clone()), Message::NoTasksWithCategory(category))
        }
        TaskFilter::Search(q) => (Message::SearchResultsHeader(q.clone()), Message::NoSearchResults(q.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_messages_use_normalized_name() {
        let (header, empty) = filter_messages(&TaskFilter::Category("WoRk".to_string()));
        assert_eq!(header.to_string(), "=== Tasks in #work ===");
        assert_eq!(empty.to_string(), "No tasks in category 'work' found!");
    }
}
