//! Display implementation for tudu messages.
//!
//! All user-facing text lives in one `match`, so wording stays consistent
//! across commands and every new variant needs an explicit phrasing.
//!
//! ```rust
//! use tudu::libs::messages::Message;
//!
//! assert_eq!(Message::TaskCreated(3).to_string(), "Task 3 created");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created", id),
            Message::TaskCompleted(id) => format!("Task {} marked as completed", id),
            Message::TaskReopened(id) => format!("Task {} marked as pending", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskUpdatedWithName(description) => format!("Task '{}' updated successfully.", description),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskDescriptionEmpty => "Task description cannot be empty".to_string(),
            Message::TaskSkippedNoChanges(id) => format!("Task {} - no changes, skipped.", id),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::TasksPendingHeader => "Pending tasks:".to_string(),
            Message::TasksCompletedHeader => "Completed tasks:".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::TasksCleared(count) => format!("Cleared {} completed task(s).", count),
            Message::TasksImported(count, path) => format!("Imported {} task(s) from {}", count, path.display()),
            Message::TasksSummary { total, completed } => format!("{} task(s), {} completed", total, completed),
            Message::ConfirmDeleteTask(description) => format!("Are you sure you want to delete '{}'?", description),
            Message::ConfirmClearCompleted(count) => format!("Are you sure you want to delete {} completed task(s)?", count),
            Message::ConfirmReplaceTasks(count) => format!("Replace {} existing task(s)?", count),
            Message::NoCompletedTasks => "No completed tasks to clear.".to_string(),

            // === STORE MESSAGES ===
            Message::TasksFilePath(path) => format!("Tasks file: {}", path.display()),
            Message::NextTaskId(id) => format!("Next task ID: {}", id),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path.display()),
            Message::ConfigModuleStorage => "Storage settings".to_string(),

            // === PROMPTS ===
            Message::PromptTaskDescription => "Task description".to_string(),
            Message::PromptTasksFile => "Tasks file path".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCompleted => "Operation completed.".to_string(),
            Message::OperationCancelled => "Operation cancelled.".to_string(),
            Message::CommandFailed(error) => format!("Command failed: {}", error),
        };

        write!(f, "{}", text)
    }
}
