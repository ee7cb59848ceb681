//! Persistence layer: the task repository and the flat-file store behind it.

pub mod store;
pub mod tasks;
