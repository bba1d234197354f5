use super::persist_and_render;
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::store::TaskStore;
use crate::{msg_info, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let storage = Storage::new()?;
    let mut store = TaskStore::new(storage.load());

    let cleared = store.clear_completed();
    if cleared == 0 {
        // Nothing completed: the control is effectively disabled.
        msg_info!(Message::NoCompletedTasks);
        return Ok(());
    }

    msg_success!(Message::CompletedCleared(cleared));
    persist_and_render(&storage, &store)
}
