use super::{persist_and_render, resolve_task_id};
use crate::libs::editor::{EditOutcome, EditSession};
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::store::TaskStore;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id or id prefix; offers a picker when omitted
    id: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let storage = Storage::new()?;
    let mut store = TaskStore::new(storage.load());

    if store.is_empty() {
        msg_info!(Message::NoTasks);
        return Ok(());
    }

    let id = match args.id {
        Some(given) => match resolve_task_id(&store, &given) {
            Some(id) => id,
            None => return Ok(()),
        },
        None => match select_task(&store)? {
            Some(id) => id,
            None => {
                msg_info!(Message::EditCancelled);
                return Ok(());
            }
        },
    };

    // The record can only vanish between resolution and lookup if the id
    // never matched; treat it as a quiet no-op either way.
    let task = match store.find(&id) {
        Some(task) => task,
        None => return Ok(()),
    };

    msg_print!(Message::EditingTask(task.text.clone()), true);
    let session = EditSession::begin(task);
    let original = session.original().to_string();

    match session.run() {
        EditOutcome::Committed(text) => {
            store.update_text(&id, &text);
            msg_success!(Message::TaskUpdated(text));
            persist_and_render(&storage, &store)
        }
        EditOutcome::Deleted => {
            store.remove(&id);
            msg_info!(Message::TaskRemovedEmptyEdit(original));
            persist_and_render(&storage, &store)
        }
        EditOutcome::Cancelled => {
            msg_info!(Message::EditCancelled);
            Ok(())
        }
    }
}

/// Interactive picker over the current list; Esc cancels the edit session
/// before it begins.
fn select_task(store: &TaskStore) -> Result<Option<String>> {
    let labels: Vec<String> = store
        .tasks()
        .iter()
        .map(|task| {
            let mark = if task.is_completed { "✓" } else { " " };
            format!("[{}] {}", mark, task.text)
        })
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|index| store.tasks()[index].id.clone()))
}
