use crate::{db::store::TaskStore, libs::messages::Message, libs::task::Task, msg_info, msg_success};
use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file holding an array of tasks
    #[arg(required = true)]
    pub file: PathBuf,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Replaces the whole task list with the contents of another tasks file.
pub fn cmd(args: ImportArgs, store: &mut TaskStore) -> Result<()> {
    let content = fs::read_to_string(&args.file).with_context(|| format!("failed to read {}", args.file.display()))?;
    let tasks: Vec<Task> =
        serde_json::from_str(&content).with_context(|| format!("{} is not a JSON array of tasks", args.file.display()))?;

    let existing = store.list()?.len();
    if existing > 0 && !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmReplaceTasks(existing).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    store.import(&tasks)?;

    msg_success!(Message::TasksImported(tasks.len(), args.file));
    Ok(())
}
