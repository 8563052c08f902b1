use crate::{db::store::TaskStore, libs::messages::Message, msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    #[arg(required = true)]
    pub id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

pub fn cmd(args: DeleteArgs, store: &TaskStore) -> Result<()> {
    let Some(task) = store.list()?.into_iter().find(|task| task.id == args.id) else {
        msg_warning!(Message::TaskNotFoundWithId(args.id));
        return Ok(());
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.description).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    // The file may have changed while the prompt was open.
    if store.delete(args.id)? {
        msg_success!(Message::TaskDeleted(args.id));
    } else {
        msg_warning!(Message::TaskNotFoundWithId(args.id));
    }
    Ok(())
}
