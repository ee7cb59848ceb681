use super::task::print_filtered;
use crate::{db::tasks::Tasks, libs::task::TaskFilter};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in titles, descriptions and categories
    #[arg(required = true)]
    query: String,
}

pub fn cmd(tasks: &Tasks, args: SearchArgs) -> Result<()> {
    print_filtered(tasks, TaskFilter::Search(args.query));
    Ok(())
}
