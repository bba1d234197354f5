use super::persist_and_render;
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::store::TaskStore;
use crate::{msg_debug, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task text; prompts interactively when omitted
    #[arg(trailing_var_arg = true)]
    text: Vec<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let storage = Storage::new()?;
    let mut store = TaskStore::new(storage.load());

    let text = if args.text.is_empty() {
        prompt_for_text()
    } else {
        args.text.join(" ")
    };

    match store.add(&text) {
        Some(task) => {
            msg_success!(Message::TaskAdded(task.text.clone()));
            persist_and_render(&storage, &store)
        }
        None => {
            // Whitespace-only input is silently refused, not an error.
            msg_debug!("ignoring empty task text");
            Ok(())
        }
    }
}

/// Reads the task text interactively. An aborted prompt yields empty text,
/// which the store then refuses as a quiet no-op.
fn prompt_for_text() -> String {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskText.to_string())
        .allow_empty(true)
        .interact_text()
        .unwrap_or_default()
}
