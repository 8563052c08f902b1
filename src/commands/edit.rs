//! Description edits.
//!
//! The store has no per-field update for descriptions, so this command works
//! on a full working copy of the list and flushes it with `save_all`.

use crate::{db::store::TaskStore, libs::messages::Message, msg_bail_anyhow, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the task to edit
    #[arg(required = true)]
    pub id: i64,
    /// New description; prompts with the current one when omitted
    pub description: Option<String>,
}

pub fn cmd(args: EditArgs, store: &TaskStore) -> Result<()> {
    let mut tasks = store.list()?;

    let Some(task) = tasks.iter_mut().find(|task| task.id == args.id) else {
        msg_warning!(Message::TaskNotFoundWithId(args.id));
        return Ok(());
    };

    let description = match args.description {
        Some(description) => description,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDescription.to_string())
            .default(task.description.clone())
            .interact_text()?,
    };
    let description = description.trim();

    if description.is_empty() {
        msg_bail_anyhow!(Message::TaskDescriptionEmpty);
    }
    if description == task.description {
        msg_info!(Message::TaskSkippedNoChanges(args.id));
        return Ok(());
    }

    task.description = description.to_string();
    store.save_all(&tasks)?;

    msg_success!(Message::TaskUpdatedWithName(description.to_string()));
    Ok(())
}
