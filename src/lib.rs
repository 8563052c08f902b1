//! # Tudu - a to-do list in a single JSON file
//!
//! A command-line to-do list whose whole data layer is one pretty-printed
//! JSON array. Every operation reads the entire file, changes it in memory
//! and writes it back.
//!
//! ## Features
//!
//! - **Task Store**: Add, complete, delete and clear tasks with store-assigned ids
//! - **Bulk Save**: Replace the whole list from a working copy or another file
//! - **Configuration**: Choose where the tasks file lives
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
