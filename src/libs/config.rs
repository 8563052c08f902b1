//! Configuration for the tudu application.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! (see [`DataStorage`]). A missing file is not an error: every setting has a
//! default, so tudu works without ever running `tudu init`.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\tudu\tudu\config.json`
//! - **macOS**: `~/Library/Application Support/tudu/tudu/config.json`
//! - **Linux**: `~/.local/share/tudu/tudu/config.json`
//!
//! ## Tasks File Resolution
//!
//! The tasks file is chosen in this order:
//!
//! 1. the `--file` command-line flag
//! 2. the `TUDU_FILE` environment variable
//! 3. `tasks_file` in `config.json`
//! 4. `tasks.json` in the data directory
//!
//! ```rust,no_run
//! use tudu::libs::config::Config;
//!
//! let config = Config::read()?;
//! let path = config.tasks_file_path(None)?;
//! println!("{}", path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::store::TASKS_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the tasks file location.
pub const TASKS_FILE_ENV_VAR: &str = "TUDU_FILE";

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Custom location of the tasks file.
    ///
    /// Relative paths are resolved against the working directory at the
    /// time a command runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<PathBuf>,
}

impl Config {
    /// Reads `config.json`, returning defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)
            .with_context(|| format!("failed to read {}", config_file_path.display()))?;
        let config: Config = serde_json::from_str(&config_str)
            .with_context(|| format!("failed to parse {}", config_file_path.display()))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON and returns the file path.
    pub fn save(&self) -> Result<PathBuf> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(config_file_path)
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default_path = match &config.tasks_file {
            Some(path) => path.clone(),
            None => DataStorage::new().get_path(TASKS_FILE_NAME)?,
        };

        msg_print!(Message::ConfigModuleStorage);
        let tasks_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTasksFile.to_string())
            .default(default_path.display().to_string())
            .interact_text()?;
        config.tasks_file = Some(PathBuf::from(tasks_file));

        Ok(config)
    }

    /// Resolves the tasks file using the flag, environment, config, default order.
    pub fn tasks_file_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        let env_override = env::var_os(TASKS_FILE_ENV_VAR).filter(|value| !value.is_empty()).map(PathBuf::from);

        let path = match cli_override {
            Some(path) => path.to_path_buf(),
            None => match env_override.or_else(|| self.tasks_file.clone()) {
                Some(path) => path,
                None => DataStorage::new().get_path(TASKS_FILE_NAME)?,
            },
        };

        if path.is_absolute() {
            Ok(path)
        } else {
            Ok(env::current_dir()?.join(path))
        }
    }
}
