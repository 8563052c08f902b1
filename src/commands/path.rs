use crate::{db::store::TaskStore, libs::messages::Message, msg_print};
use anyhow::Result;

pub fn cmd(store: &TaskStore) -> Result<()> {
    msg_print!(Message::TasksFilePath(store.path().to_path_buf()));
    msg_print!(Message::NextTaskId(store.next_id()));
    Ok(())
}
