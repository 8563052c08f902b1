//! Error taxonomy of the task store.
//!
//! A missing record is not an error: mutating calls report whether a record
//! matched and log a warning otherwise.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The tasks file exists but does not hold a JSON array of tasks.
    #[error("tasks file {} is not a valid task list: {source}", .path.display())]
    Startup {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on tasks file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tasks file was valid at startup but no longer parses.
    #[error("failed to parse tasks file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The next id would not fit in an `i64`.
    #[error("no task ids left after {max_id}")]
    IdsExhausted { max_id: i64 },

    #[error("failed to encode tasks: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid task records: {0}")]
    InvalidRecords(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io { path: path.into(), source }
    }
}
