//! Configuration initialization command.
//!
//! Runs the interactive wizard that records where the tasks file lives, or
//! with `--delete` removes the saved configuration so defaults apply again.

use crate::{
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating a new one
    #[arg(short, long)]
    pub delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(&config_file_path)?;
        }
        msg_info!(Message::OperationCompleted);
        return Ok(());
    }

    let path = Config::init()?.save()?;

    msg_success!(Message::ConfigSaved(path));
    Ok(())
}
