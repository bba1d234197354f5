use super::{persist_and_render, resolve_task_id};
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::store::TaskStore;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RmArgs {
    /// Task id or id prefix
    id: String,
}

pub fn cmd(args: RmArgs) -> Result<()> {
    let storage = Storage::new()?;
    let mut store = TaskStore::new(storage.load());

    let id = match resolve_task_id(&store, &args.id) {
        Some(id) => id,
        None => return Ok(()),
    };

    let text = store.find(&id).map(|task| task.text.clone()).unwrap_or_default();
    store.remove(&id);
    msg_success!(Message::TaskRemoved(text));
    persist_and_render(&storage, &store)
}
