//! Task record shared by the store and the command layer.
//!
//! A task is a plain value: the store assigns its identifier, the caller
//! owns any working copy. Field order here is the field order written to
//! the tasks file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in the to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier, or [`Task::TRANSIENT_ID`] before the task is saved.
    #[serde(default = "Task::transient_id")]
    pub id: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Placeholder id carried by a task the store has not assigned yet.
    pub const TRANSIENT_ID: i64 = -1;

    /// Creates a transient, pending task.
    pub fn new(description: &str) -> Self {
        Task {
            id: Self::TRANSIENT_ID,
            description: description.to_string(),
            completed: false,
        }
    }

    /// Creates a task with a known identifier, as read back from the tasks file.
    pub fn with_id(id: i64, description: &str, completed: bool) -> Self {
        Task {
            id,
            description: description.to_string(),
            completed,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id >= 1
    }

    fn transient_id() -> i64 {
        Self::TRANSIENT_ID
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.completed { "Completed" } else { "Pending" };
        write!(f, "{} ({})", self.description, state)
    }
}

/// Which tasks a listing should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}
