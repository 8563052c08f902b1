//! Completion toggles: `tudu done <id>` and `tudu undone <id>`.

use crate::{db::store::TaskStore, libs::messages::Message, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompletionArgs {
    /// ID of the task
    #[arg(required = true)]
    pub id: i64,
}

pub fn cmd(args: CompletionArgs, completed: bool, store: &TaskStore) -> Result<()> {
    if !store.set_completion(args.id, completed)? {
        msg_warning!(Message::TaskNotFoundWithId(args.id));
        return Ok(());
    }

    if completed {
        msg_success!(Message::TaskCompleted(args.id));
    } else {
        msg_success!(Message::TaskReopened(args.id));
    }
    Ok(())
}
