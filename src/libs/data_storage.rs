//! Location of tudu's files on disk.
//!
//! Everything tudu writes by default (the tasks file and `config.json`)
//! lives in one per-user directory, `<base>/<owner>/<name>`, where owner and
//! name come from the package metadata:
//!
//! - **Windows**: `%LOCALAPPDATA%`
//! - **macOS**: `~/Library/Application Support`
//! - **Linux and others**: `~/.local/share`
//!
//! When the base variable is unset the current directory is used.

use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub const VENDOR_NAME: &str = APP_METADATA_OWNER;
pub const APP_NAME: &str = APP_METADATA_NAME;

/// Resolves files inside the per-user application data directory.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    /// Builds the data directory path for the current platform without touching the disk.
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    /// The data directory itself; it may not exist yet.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path of `file_name` in the data directory, creating the directory on first use.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
