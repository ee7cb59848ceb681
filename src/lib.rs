//! # Tasker
//!
//! A single-user command-line task tracker. Tasks carry a title, a
//! description, a priority from 1 to 5, an optional due date and free-form
//! categories, and are kept in one JSON file between runs.
//!
//! ## Features
//!
//! - **Task Management**: Create, complete and delete tasks
//! - **Views**: Sorted listing, filters by priority and category, substring search
//! - **Categories**: Normalized tags that can be added and removed per task
//! - **Persistence**: Whole-file JSON store, rewritten on every change
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasker::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
