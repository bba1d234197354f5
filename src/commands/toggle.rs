use super::{persist_and_render, resolve_task_id};
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::store::TaskStore;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task id or id prefix
    #[arg(required_unless_present = "all")]
    id: Option<String>,

    /// Toggle every task at once: if all are done, reopen all;
    /// otherwise mark all done
    #[arg(long, conflicts_with = "id")]
    all: bool,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let storage = Storage::new()?;
    let mut store = TaskStore::new(storage.load());

    if args.all {
        return toggle_all(&storage, &mut store);
    }

    let given = match args.id {
        // Unreachable in practice: clap requires an id unless --all is set.
        Some(id) => id,
        None => return Ok(()),
    };
    let id = match resolve_task_id(&store, &given) {
        Some(id) => id,
        None => return Ok(()),
    };

    store.toggle_completed(&id);
    if let Some(task) = store.find(&id) {
        if task.is_completed {
            msg_success!(Message::TaskCompleted(task.text.clone()));
        } else {
            msg_success!(Message::TaskReopened(task.text.clone()));
        }
    }
    persist_and_render(&storage, &store)
}

fn toggle_all(storage: &Storage, store: &mut TaskStore) -> Result<()> {
    if !store.toggle_all() {
        msg_info!(Message::NoTasks);
        return Ok(());
    }
    if store.all_completed() {
        msg_success!(Message::AllMarkedCompleted(store.len()));
    } else {
        msg_success!(Message::AllMarkedActive(store.len()));
    }
    persist_and_render(storage, store)
}
