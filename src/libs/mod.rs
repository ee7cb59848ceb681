//! Core library modules for tasker.
//!
//! - **Domain**: the task entity and its errors
//! - **Infrastructure**: configuration, data directory resolution, messaging
//! - **Presentation**: table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasker::db::tasks::{NewTask, Tasks};
//!
//! let mut tasks = Tasks::open("tasks.json");
//! let id = tasks.add_task(NewTask::new("Implement feature").description("Add user authentication").priority(1))?;
//! # Ok::<(), tasker::libs::error::TaskError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod task;
pub mod view;
