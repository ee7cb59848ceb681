//! Display implementation for tasker messages.
//!
//! All message text lives here, in one match, so wording stays consistent
//! across the CLI and the interactive menu.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task added successfully with ID: {}", id),
            Message::TaskCompleted => "Task marked as completed!".to_string(),
            Message::TaskDeleted => "Task deleted successfully!".to_string(),
            Message::TaskNotFoundWithId(id) => format!("Task with ID '{}' not found!", id),
            Message::InvalidTask(reason) => format!("Task not created: {}", reason),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::DeleteCancelled => "Deletion cancelled.".to_string(),

            // === LISTING MESSAGES ===
            Message::TasksHeader => "=== All Tasks ===".to_string(),
            Message::TasksByPriorityHeader(priority) => format!("=== Priority {} Tasks ===", priority),
            Message::TasksByCategoryHeader(category) => format!("=== Tasks in #{} ===", category),
            Message::SearchResultsHeader(query) => format!("=== Search Results for '{}' ===", query),
            Message::NoTasksFound => "No tasks found!".to_string(),
            Message::NoTasksWithPriority(priority) => format!("No tasks with priority {} found!", priority),
            Message::NoTasksWithCategory(category) => format!("No tasks in category '{}' found!", category),
            Message::NoSearchResults(query) => format!("No tasks found matching '{}'", query),
            Message::TaskCount(count) => format!("{} task(s)", count),

            // === CATEGORY MESSAGES ===
            Message::CategoryAdded(category) => format!("Category '{}' added.", category),
            Message::CategoryRemoved(category) => format!("Category '{}' removed.", category),
            Message::CategoryAlreadyPresent(category) => format!("Category '{}' is empty or already assigned.", category),
            Message::CategoryNotOnTask(category) => format!("Task does not have category '{}'.", category),
            Message::CategoriesHeader => "=== Categories ===".to_string(),
            Message::NoCategoriesFound => "No categories in use.".to_string(),

            // === STORE MESSAGES ===
            Message::StoreCorrupt(reason) => format!("Error loading tasks: {}. Starting with an empty task list.", reason),
            Message::StoreLoaded(count, path) => format!("Loaded {} task(s) from {}", count, path),
            Message::StoreMissing(path) => format!("No task file at {}, starting fresh", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully.".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::PromptStorageFile => "Task file path (leave blank for default)".to_string(),

            // === MENU MESSAGES ===
            Message::MenuTitle => "===== Task Manager =====".to_string(),
            Message::MenuAddTask => "Add a new task".to_string(),
            Message::MenuViewAll => "View all tasks".to_string(),
            Message::MenuViewByPriority => "View tasks by priority".to_string(),
            Message::MenuViewByCategory => "View tasks by category".to_string(),
            Message::MenuMarkCompleted => "Mark task as completed".to_string(),
            Message::MenuDeleteTask => "Delete a task".to_string(),
            Message::MenuSearch => "Search tasks".to_string(),
            Message::MenuExit => "Exit".to_string(),
            Message::PromptMenuChoice => "Choose an action".to_string(),
            Message::SavingAndExiting => "Saving tasks and exiting...".to_string(),
            Message::Goodbye => "Goodbye!".to_string(),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Enter task title".to_string(),
            Message::PromptTaskDescription => "Enter task description".to_string(),
            Message::PromptTaskPriority => "Enter priority (1-5, 1 being highest)".to_string(),
            Message::PromptDueDate => "Enter due date (YYYY-MM-DD) or leave blank".to_string(),
            Message::PromptCategories => "Enter categories separated by commas, or leave blank".to_string(),
            Message::PromptTaskId => "Enter task ID".to_string(),
            Message::PromptCategory => "Enter category".to_string(),
            Message::PromptSearchQuery => "Enter search term".to_string(),
            Message::PriorityRange => "Priority must be between 1 and 5.".to_string(),
        };
        write!(f, "{}", s)
    }
}
