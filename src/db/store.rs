//! Whole-file JSON task store.
//!
//! The backing file is a pretty-printed JSON array of [`Task`] records and is
//! the only source of truth: every operation reads the full array, changes it
//! in memory and writes the full array back. Nothing is cached between calls.
//!
//! The next identifier lives in memory only. It is seeded from the largest id
//! in the file when the store is opened and advanced by [`TaskStore::add`],
//! so ids are never reused within a session even after deletions.
//!
//! There is no locking. Two stores (or two processes) writing the same file
//! race on the whole array and the last write wins.
//!
//! ```rust,no_run
//! use tudu::db::store::TaskStore;
//!
//! let mut store = TaskStore::open("tasks.json")?;
//! let id = store.add("buy milk")?;
//! store.set_completion(id, true)?;
//! assert_eq!(store.clear_completed()?, 1);
//! # Ok::<(), tudu::db::error::StoreError>(())
//! ```

use super::error::{Result, StoreError};
use crate::libs::task::Task;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const TASKS_FILE_NAME: &str = "tasks.json";

#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    next_id: i64,
}

impl TaskStore {
    /// Opens the store at `path`, creating an empty task list if the file is missing.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Startup`] if the file exists but is not a JSON array of tasks
    /// - [`StoreError::IdsExhausted`] if the largest id in the file is `i64::MAX`
    /// - [`StoreError::Io`] if the file or its directory cannot be read or created
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
            write_tasks(&path, &[])?;
            tracing::info!(path = %path.display(), "created new tasks file");
            return Ok(Self { path, next_id: 1 });
        }

        let content = fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?;
        let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|source| StoreError::Startup {
            path: path.clone(),
            source,
        })?;
        let max_id = tasks.iter().map(|task| task.id).max().unwrap_or(0).max(0);
        let next_id = id_after(max_id)?;

        tracing::info!(path = %path.display(), tasks = tasks.len(), next_id, "loaded tasks file");
        Ok(Self { path, next_id })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The id the next call to [`TaskStore::add`] will assign.
    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    /// Returns every task in file order.
    pub fn list(&self) -> Result<Vec<Task>> {
        let tasks = self.load()?;
        tracing::debug!(count = tasks.len(), "retrieved tasks");
        Ok(tasks)
    }

    /// Appends a pending task and returns its new id.
    pub fn add(&mut self, description: &str) -> Result<i64> {
        let mut tasks = self.load()?;

        let id = self.next_id;
        let next_id = id_after(id)?;
        tasks.push(Task::with_id(id, description, false));

        self.save(&tasks)?;
        self.next_id = next_id;
        tracing::info!(id, "task added");
        Ok(id)
    }

    /// Sets the completion flag of task `id`.
    ///
    /// Returns `false` and leaves the file untouched when no task has that id.
    pub fn set_completion(&self, id: i64, completed: bool) -> Result<bool> {
        let mut tasks = self.load()?;

        match tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = completed;
                self.save(&tasks)?;
                tracing::info!(id, completed, "task completion updated");
                Ok(true)
            }
            None => {
                tracing::warn!(id, "no task found");
                Ok(false)
            }
        }
    }

    /// Removes task `id`. Returns `false` without writing when it does not exist.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let mut tasks = self.load()?;

        let Some(position) = tasks.iter().position(|task| task.id == id) else {
            tracing::warn!(id, "no task found");
            return Ok(false);
        };
        tasks.remove(position);

        self.save(&tasks)?;
        tracing::info!(id, "task deleted");
        Ok(true)
    }

    /// Removes every completed task and returns how many were removed.
    ///
    /// The file is rewritten even when nothing was removed.
    pub fn clear_completed(&self) -> Result<usize> {
        let mut tasks = self.load()?;

        let before = tasks.len();
        tasks.retain(|task| !task.completed);
        let removed = before - tasks.len();

        self.save(&tasks)?;
        tracing::info!(removed, "cleared completed tasks");
        Ok(removed)
    }

    /// Replaces the whole file with `tasks`, ignoring what it held before.
    ///
    /// The id counter is not touched, so a caller flushing a stale working
    /// copy silently discards changes made through the other operations.
    pub fn save_all(&self, tasks: &[Task]) -> Result<()> {
        self.save(tasks)?;
        tracing::info!(count = tasks.len(), "saved all tasks");
        Ok(())
    }

    /// Like [`TaskStore::save_all`], but rejects records without a persisted,
    /// unique id and advances the counter past the largest one.
    pub fn import(&mut self, tasks: &[Task]) -> Result<()> {
        validate_records(tasks)?;
        self.save_all(tasks)?;

        let max_id = tasks.iter().map(|task| task.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(id_after(max_id)?);
        Ok(())
    }

    fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        write_tasks(&self.path, tasks)?;
        tracing::debug!(count = tasks.len(), path = %self.path.display(), "saved tasks to file");
        Ok(())
    }
}

fn id_after(id: i64) -> Result<i64> {
    id.checked_add(1).ok_or(StoreError::IdsExhausted { max_id: id })
}

fn write_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks).map_err(StoreError::Serialize)?;
    fs::write(path, json).map_err(|e| StoreError::io(path, e))
}

/// Checks that every record has a persisted id, that no id repeats and that
/// an id is still left to assign after the largest one.
pub fn validate_records(tasks: &[Task]) -> Result<()> {
    let mut seen = HashSet::new();

    for task in tasks {
        if !task.is_persisted() {
            return Err(StoreError::InvalidRecords(format!(
                "task '{}' has id {}, expected a positive id",
                task.description, task.id
            )));
        }
        if task.id == i64::MAX {
            return Err(StoreError::IdsExhausted { max_id: task.id });
        }
        if !seen.insert(task.id) {
            return Err(StoreError::InvalidRecords(format!("duplicate id {}", task.id)));
        }
    }

    Ok(())
}
