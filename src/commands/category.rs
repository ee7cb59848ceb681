use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, task::normalize_category, view::View},
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    command: Option<CategoryCommand>,
}

#[derive(Debug, Subcommand)]
enum CategoryCommand {
    /// Tag a task with a category
    Add {
        /// Task ID
        id: String,
        /// Category name
        category: String,
    },
    /// Remove a category from a task
    Remove {
        /// Task ID
        id: String,
        /// Category name
        category: String,
    },
    /// List all categories in use
    List,
}

pub fn cmd(tasks: &mut Tasks, args: CategoryArgs) -> Result<()> {
    match args.command {
        Some(CategoryCommand::Add { id, category }) => handle_add(tasks, id, category),
        Some(CategoryCommand::Remove { id, category }) => handle_remove(tasks, id, category),
        Some(CategoryCommand::List) | None => handle_list(tasks),
    }
}

fn handle_add(tasks: &mut Tasks, id: String, category: String) -> Result<()> {
    if tasks.get_task(&id).is_none() {
        msg_error!(Message::TaskNotFoundWithId(id));
        return Ok(());
    }

    if tasks.add_category_to_task(&id, &category)? {
        msg_success!(Message::CategoryAdded(normalize_category(&category)));
    } else {
        msg_warning!(Message::CategoryAlreadyPresent(normalize_category(&category)));
    }
    Ok(())
}

fn handle_remove(tasks: &mut Tasks, id: String, category: String) -> Result<()> {
    if tasks.get_task(&id).is_none() {
        msg_error!(Message::TaskNotFoundWithId(id));
        return Ok(());
    }

    if tasks.remove_category_from_task(&id, &category)? {
        msg_success!(Message::CategoryRemoved(normalize_category(&category)));
    } else {
        msg_warning!(Message::CategoryNotOnTask(normalize_category(&category)));
    }
    Ok(())
}

fn handle_list(tasks: &Tasks) -> Result<()> {
    let categories = tasks.get_all_categories();
    if categories.is_empty() {
        msg_info!(Message::NoCategoriesFound);
        return Ok(());
    }

    msg_print!(Message::CategoriesHeader, true);
    View::categories(&categories);
    Ok(())
}
