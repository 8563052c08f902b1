//! Supporting modules for the tudu application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data directory resolution, messaging
//! - **Data Model**: The task record shared with the store
//! - **User Interface**: Table rendering of task lists
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::libs::config::Config;
//! use tudu::db::store::TaskStore;
//!
//! let path = Config::read()?.tasks_file_path(None)?;
//! let mut store = TaskStore::open(&path)?;
//! store.add("Implement feature")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod task;
pub mod view;
