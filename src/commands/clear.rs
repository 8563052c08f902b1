use crate::{db::store::TaskStore, libs::messages::Message, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

pub fn cmd(args: ClearArgs, store: &TaskStore) -> Result<()> {
    let completed = store.list()?.iter().filter(|task| task.completed).count();

    if completed > 0 && !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearCompleted(completed).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let removed = store.clear_completed()?;
    if removed == 0 {
        msg_info!(Message::NoCompletedTasks);
    } else {
        msg_success!(Message::TasksCleared(removed));
    }
    Ok(())
}
