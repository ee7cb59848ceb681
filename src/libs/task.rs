//! Task entity and its on-disk record.
//!
//! A [`Task`] is a single unit of work: a title, a free-form description,
//! a priority from 1 (most urgent) to 5, an optional due date, a completion
//! flag and a set of normalized categories. The entity owns its own small
//! rules (category normalization, overdue computation) but does not
//! validate the priority range; the repository does that on creation.
//!
//! ## Persistence
//!
//! Tasks are persisted through [`TaskRecord`], the typed schema of one entry
//! in the store file. Records written by older versions may lack the
//! `categories` field, which decodes as an empty set.
//!
//! ## Usage
//!
//! ```rust
//! use tasker::libs::task::Task;
//!
//! let mut task = Task::new("Write report", "Quarterly numbers", 2, Some("2030-01-15"), &["Work"]);
//! assert!(task.add_category("urgent"));
//! assert!(!task.add_category("WORK"));
//! task.mark_completed();
//! assert!(!task.is_overdue());
//! ```

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use tracing::warn;
use uuid::Uuid;

/// Priority given to tasks when the caller does not pick one.
pub const DEFAULT_PRIORITY: u8 = 3;

/// Lowest accepted priority value (most urgent).
pub const MIN_PRIORITY: u8 = 1;

/// Highest accepted priority value (least urgent).
pub const MAX_PRIORITY: u8 = 5;

/// Format accepted for due date literals.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

const ID_LENGTH: usize = 8;

/// One trackable unit of work.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub(crate) id: String,
    pub title: String,
    pub description: String,
    pub priority: u8,
    pub(crate) created_at: NaiveDateTime,
    pub due_date: Option<NaiveDateTime>,
    pub completed: bool,
    categories: Vec<String>,
}

/// Serialized form of a [`Task`], one value of the store's id-keyed object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: u8,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub due_date: Option<NaiveDateTime>,
    pub completed: bool,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Derived views the repository can produce.
#[derive(Debug, Clone)]
pub enum TaskFilter {
    /// Every task, incomplete first, then by priority.
    All,
    /// Tasks with exactly this priority.
    Priority(u8),
    /// Tasks tagged with this category (case-insensitive).
    Category(String),
    /// Case-insensitive substring search over title, description and categories.
    Search(String),
}

impl Task {
    /// Creates a task with a fresh id.
    ///
    /// A malformed `due_date` literal is not an error: the task is created
    /// without a due date and a warning is logged.
    pub fn new<S: AsRef<str>>(title: &str, description: &str, priority: u8, due_date: Option<&str>, categories: &[S]) -> Self {
        let mut task = Task {
            id: generate_id(),
            title: title.to_string(),
            description: description.to_string(),
            priority,
            created_at: Local::now().naive_local(),
            due_date: due_date.and_then(parse_due_date),
            completed: false,
            categories: Vec::new(),
        };
        for category in categories {
            task.add_category(category.as_ref());
        }

        task
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Normalized categories in insertion order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Marks the task as done. Calling it again changes nothing.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Whether the task is past its due date, measured against the local clock.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Local::now().naive_local())
    }

    /// Whether the task is past its due date at `now`.
    ///
    /// Completed tasks and tasks without a due date are never overdue.
    pub fn is_overdue_at(&self, now: NaiveDateTime) -> bool {
        match self.due_date {
            Some(due) if !self.completed => now > due,
            _ => false,
        }
    }

    /// Adds a category, returning `false` if it normalizes to empty or is already present.
    pub fn add_category(&mut self, category: &str) -> bool {
        let category = normalize_category(category);
        if category.is_empty() || self.has_category(&category) {
            return false;
        }
        self.categories.push(category);
        true
    }

    /// Removes a category, returning `false` if the task did not carry it.
    pub fn remove_category(&mut self, category: &str) -> bool {
        let category = normalize_category(category);
        match self.categories.iter().position(|c| *c == category) {
            Some(index) => {
                self.categories.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether a lower-cased `query` occurs in the title, description or any category.
    pub fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
            || self.categories.iter().any(|c| c.contains(query))
    }

    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            created_at: self.created_at,
            due_date: self.due_date,
            completed: self.completed,
            categories: self.categories.clone(),
        }
    }

    /// Rebuilds a task from its stored record. Categories are normalized again.
    pub fn from_record(record: TaskRecord) -> Self {
        let mut task = Task {
            id: record.id,
            title: record.title,
            description: record.description,
            priority: record.priority,
            created_at: record.created_at,
            due_date: record.due_date,
            completed: record.completed,
            categories: Vec::new(),
        };
        for category in &record.categories {
            task.add_category(category);
        }

        task
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = if self.completed { "✓" } else { "✗" };
        write!(f, "[{}] {} {} ({})", self.id, status, self.title, "!".repeat(self.priority as usize))?;
        if let Some(due) = self.due_date {
            write!(f, ", Due: {}", due.format(DUE_DATE_FORMAT))?;
        }
        if self.is_overdue() {
            write!(f, " (OVERDUE!)")?;
        }
        if !self.categories.is_empty() {
            let tags: Vec<String> = self.categories.iter().map(|c| format!("#{}", c)).collect();
            write!(f, " [{}]", tags.join(", "))?;
        }

        Ok(())
    }
}

/// Glyph shown next to a priority level in tables.
pub fn priority_marker(priority: u8) -> &'static str {
    match priority {
        1 => "🔴",
        2 => "🟠",
        3 => "🟡",
        4 => "🟢",
        5 => "🔵",
        _ => "❓",
    }
}

/// Trims and lower-cases a category. Empty input stays empty.
pub fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

/// Parses a `YYYY-MM-DD` literal into midnight of that day.
pub fn parse_due_date(literal: &str) -> Option<NaiveDateTime> {
    match NaiveDate::parse_from_str(literal.trim(), DUE_DATE_FORMAT) {
        Ok(date) => Some(date.and_time(NaiveTime::MIN)),
        Err(error) => {
            warn!(literal, %error, "invalid due date, expected YYYY-MM-DD; storing no due date");
            None
        }
    }
}

/// Short random task id: the first eight hex digits of a v4 UUID.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()[..ID_LENGTH].to_string()
}
