//! Persistence layer for tudu.
//!
//! Tasks live in a single pretty-printed JSON file. The [`store::TaskStore`]
//! loads the whole file for every operation, mutates the list in memory and
//! writes the whole list back.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::db::store::TaskStore;
//!
//! let mut store = TaskStore::open("tasks.json")?;
//! let id = store.add("Review code")?;
//! store.set_completion(id, true)?;
//! for task in store.list()? {
//!     println!("{}", task);
//! }
//! # Ok::<(), tudu::db::error::StoreError>(())
//! ```

/// Error types returned by the store.
pub mod error;

/// The whole-file JSON task store.
pub mod store;
