//! Task repository: the in-memory collection and its persistence.
//!
//! [`Tasks`] is the only owner of the task collection and of the store file.
//! Every successful mutation rewrites the whole store before returning, so a
//! failed write surfaces to the caller immediately. Loading is lenient: a
//! missing store is an empty collection, and a corrupt one is reported and
//! replaced by an empty collection.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasker::db::tasks::{NewTask, Tasks};
//!
//! let mut tasks = Tasks::open("tasks.json");
//! let id = tasks.add_task(NewTask::new("Buy milk").priority(2).category("home"))?;
//! tasks.mark_task_completed(&id)?;
//! # Ok::<(), tasker::libs::error::TaskError>(())
//! ```

use super::store::{read_store, write_store, StoreRead, StoreRecords};
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::task::{generate_id, Task, TaskFilter, DEFAULT_PRIORITY, MAX_PRIORITY, MIN_PRIORITY};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Arguments for creating a task, with the same defaults as [`Task::new`] callers expect.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: u8,
    pub due_date: Option<String>,
    pub categories: Vec<String>,
}

impl NewTask {
    pub fn new(title: &str) -> Self {
        NewTask {
            title: title.to_string(),
            description: String::new(),
            priority: DEFAULT_PRIORITY,
            due_date: None,
            categories: Vec::new(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    pub fn due_date(mut self, due_date: &str) -> Self {
        self.due_date = Some(due_date.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.categories.push(category.to_string());
        self
    }
}

/// What [`Tasks::load_tasks`] found at the store path.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// No store file yet; the collection was left as it was.
    Missing,
    /// This many tasks were read from the store.
    Loaded(usize),
    /// The store could not be parsed; the collection is now empty.
    Corrupt(String),
}

pub struct Tasks {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl Tasks {
    /// Creates an empty repository backed by the store at `path`. Nothing is read.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Tasks {
            tasks: Vec::new(),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a repository and loads whatever the store at `path` holds.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let mut tasks = Self::new(path);
        tasks.load_tasks();
        tasks
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Validates the arguments, stores a new task and persists the collection.
    ///
    /// Returns the id of the created task.
    pub fn add_task(&mut self, new_task: NewTask) -> TaskResult<String> {
        if new_task.title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&new_task.priority) {
            return Err(TaskError::PriorityOutOfRange(new_task.priority));
        }

        let mut task = Task::new(
            &new_task.title,
            &new_task.description,
            new_task.priority,
            new_task.due_date.as_deref(),
            new_task.categories.as_slice(),
        );
        while self.position(&task.id).is_some() {
            task.id = generate_id();
        }

        let id = task.id.clone();
        self.tasks.push(task);
        self.save_tasks()?;

        Ok(id)
    }

    pub fn get_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// All tasks, incomplete before completed, then by ascending priority.
    ///
    /// Ties keep insertion order.
    pub fn get_all_tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().collect();
        tasks.sort_by(|a, b| compare_tasks(a, b));
        tasks
    }

    pub fn get_tasks_by_priority(&self, priority: u8) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.priority == priority).collect()
    }

    pub fn get_tasks_by_category(&self, category: &str) -> Vec<&Task> {
        let category = category.to_lowercase();
        self.tasks.iter().filter(|task| task.has_category(&category)).collect()
    }

    /// Every category in use, sorted and without duplicates.
    pub fn get_all_categories(&self) -> Vec<String> {
        let categories: BTreeSet<&String> = self.tasks.iter().flat_map(|task| task.categories()).collect();
        categories.into_iter().cloned().collect()
    }

    /// Case-insensitive substring match against title, description or any category.
    pub fn search_tasks(&self, query: &str) -> Vec<&Task> {
        let query = query.to_lowercase();
        self.tasks.iter().filter(|task| task.matches(&query)).collect()
    }

    pub fn fetch(&self, filter: TaskFilter) -> Vec<&Task> {
        match filter {
            TaskFilter::All => self.get_all_tasks(),
            TaskFilter::Priority(priority) => self.get_tasks_by_priority(priority),
            TaskFilter::Category(category) => self.get_tasks_by_category(&category),
            TaskFilter::Search(query) => self.search_tasks(&query),
        }
    }

    /// Returns `Ok(false)` if the task is missing or already has the category.
    pub fn add_category_to_task(&mut self, id: &str, category: &str) -> TaskResult<bool> {
        self.update_and_save(id, |task| task.add_category(category))
    }

    /// Returns `Ok(false)` if the task is missing or does not have the category.
    pub fn remove_category_from_task(&mut self, id: &str, category: &str) -> TaskResult<bool> {
        self.update_and_save(id, |task| task.remove_category(category))
    }

    pub fn mark_task_completed(&mut self, id: &str) -> TaskResult<bool> {
        self.update_and_save(id, |task| {
            task.mark_completed();
            true
        })
    }

    pub fn delete_task(&mut self, id: &str) -> TaskResult<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        self.tasks.remove(index);
        self.save_tasks()?;

        Ok(true)
    }

    /// Writes the whole collection to the store, replacing its previous contents.
    pub fn save_tasks(&self) -> TaskResult<()> {
        let records: StoreRecords = self.tasks.iter().map(|task| (task.id.clone(), task.to_record())).collect();
        write_store(&self.path, &records)
    }

    /// Merges the store's tasks into the collection.
    ///
    /// A missing store leaves the collection untouched. A store that cannot
    /// be read or parsed empties the collection and is reported as
    /// [`LoadOutcome::Corrupt`].
    pub fn load_tasks(&mut self) -> LoadOutcome {
        match read_store(&self.path) {
            StoreRead::Absent => LoadOutcome::Missing,
            StoreRead::Corrupt(reason) => {
                warn!(path = %self.path.display(), %reason, "task store is corrupt, starting with no tasks");
                self.tasks.clear();
                LoadOutcome::Corrupt(reason)
            }
            StoreRead::Ok(records) => {
                let count = records.len();
                for (key, record) in records {
                    if key != record.id {
                        warn!(%key, id = %record.id, "store key does not match task id, keeping task id");
                    }
                    let task = Task::from_record(record);
                    match self.position(&task.id) {
                        Some(index) => self.tasks[index] = task,
                        None => self.tasks.push(task),
                    }
                }
                self.tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

                LoadOutcome::Loaded(count)
            }
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn update_and_save<F>(&mut self, id: &str, update: F) -> TaskResult<bool>
    where
        F: FnOnce(&mut Task) -> bool,
    {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        if !update(&mut self.tasks[index]) {
            return Ok(false);
        }
        self.save_tasks()?;

        Ok(true)
    }
}

/// Incomplete before completed, then lower priority value first.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    a.completed.cmp(&b.completed).then(a.priority.cmp(&b.priority))
}
