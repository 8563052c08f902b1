use crate::{db::store::TaskStore, libs::messages::Message, msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description
    #[arg(required = true)]
    pub description: String,
}

pub fn cmd(args: AddArgs, store: &mut TaskStore) -> Result<()> {
    let description = args.description.trim();
    if description.is_empty() {
        msg_bail_anyhow!(Message::TaskDescriptionEmpty);
    }

    let id = store.add(description)?;

    msg_success!(Message::TaskCreated(id));
    Ok(())
}
