pub mod category;
pub mod init;
pub mod interactive;
pub mod search;
pub mod task;

use crate::{
    db::tasks::{LoadOutcome, Tasks},
    libs::{config::Config, messages::Message},
    msg_debug, msg_warning,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a new task")]
    Add(task::AddArgs),
    #[command(about = "List tasks, optionally filtered by priority or category")]
    List(task::ListArgs),
    #[command(about = "Show a single task")]
    Show(task::IdArgs),
    #[command(about = "Mark a task as completed")]
    Done(task::IdArgs),
    #[command(about = "Delete a task")]
    Delete(task::DeleteArgs),
    #[command(about = "Search tasks by title, description or category")]
    Search(search::SearchArgs),
    #[command(about = "Manage task categories")]
    Category(category::CategoryArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Parses the command line and runs the selected command, or the interactive menu.
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let command = match self.command {
            Some(Commands::Init(args)) => return init::cmd(args),
            command => command,
        };

        let mut tasks = open_tasks(self.file)?;
        match command {
            Some(Commands::Add(args)) => task::add(&mut tasks, args),
            Some(Commands::List(args)) => task::list(&tasks, args),
            Some(Commands::Show(args)) => task::show(&tasks, args),
            Some(Commands::Done(args)) => task::done(&mut tasks, args),
            Some(Commands::Delete(args)) => task::delete(&mut tasks, args),
            Some(Commands::Search(args)) => search::cmd(&tasks, args),
            Some(Commands::Category(args)) => category::cmd(&mut tasks, args),
            Some(Commands::Init(_)) => Ok(()),
            None => interactive::cmd(&mut tasks),
        }
    }
}

/// Opens the repository at `file`, or at the configured store path, and reports how loading went.
pub fn open_tasks(file: Option<PathBuf>) -> Result<Tasks> {
    let path = match file {
        Some(path) => path,
        None => Config::read()?.store_path()?,
    };

    let mut tasks = Tasks::new(&path);
    match tasks.load_tasks() {
        LoadOutcome::Missing => msg_debug!(Message::StoreMissing(path.display().to_string())),
        LoadOutcome::Loaded(count) => msg_debug!(Message::StoreLoaded(count, path.display().to_string())),
        LoadOutcome::Corrupt(reason) => msg_warning!(Message::StoreCorrupt(reason)),
    }

    Ok(tasks)
}
