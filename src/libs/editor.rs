//! Interactive edit session for a single task.
//!
//! An edit session is a scoped object owned by the target record's id: it is
//! begun from the current record state, runs exactly one prompt, and is
//! consumed on exit. Every exit path (commit, delete-on-empty, cancel) ends
//! the session, so no prompt state survives into the next command.

use super::task::Task;
use crate::libs::messages::Message;
use dialoguer::{theme::ColorfulTheme, Input};

/// How an edit session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Non-empty text was committed; carries the trimmed value.
    Committed(String),
    /// The edit was committed with empty text: the record must be removed.
    Deleted,
    /// The prompt was aborted; the record stays untouched.
    Cancelled,
}

#[derive(Debug)]
pub struct EditSession {
    task_id: String,
    original: String,
}

impl EditSession {
    /// Enters edit mode for the given record.
    pub fn begin(task: &Task) -> Self {
        EditSession {
            task_id: task.id.clone(),
            original: task.text.clone(),
        }
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Runs the prompt, pre-filled with the current text, and consumes the
    /// session. A prompt interrupt counts as cancel, never as a mutation.
    pub fn run(self) -> EditOutcome {
        let prompt = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskText.to_string())
            .with_initial_text(&self.original)
            .allow_empty(true)
            .interact_text();

        match prompt {
            Ok(text) => Self::classify(&text),
            Err(_) => EditOutcome::Cancelled,
        }
    }

    /// Maps submitted text to an outcome: empty trimmed text deletes the
    /// record, anything else commits the trimmed value.
    pub fn classify(text: &str) -> EditOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            EditOutcome::Deleted
        } else {
            EditOutcome::Committed(trimmed.to_string())
        }
    }
}
