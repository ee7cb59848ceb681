//! Error type for the task repository.
//!
//! Only two kinds of failure leave the repository as errors: invalid
//! arguments on task creation and a store that cannot be written. Missing
//! tasks are reported through `Option`/`bool` returns, and an unreadable
//! store on load degrades to an empty collection.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Priority must be an integer between 1 and 5, got {0}")]
    PriorityOutOfRange(u8),

    #[error("Failed to write task store {path}: {source}")]
    StoreUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode task store: {0}")]
    StoreEncode(#[from] serde_json::Error),
}

impl TaskError {
    /// Whether the caller passed bad input and may retry with different values.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TaskError::EmptyTitle | TaskError::PriorityOutOfRange(_))
    }
}

pub type TaskResult<T> = Result<T, TaskError>;
