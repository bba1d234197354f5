//! Display implementation for application messages.
//!
//! Single source of truth for all user-facing text. Variants carry their
//! dynamic parts as typed payloads; formatting happens only here.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(text) => format!("Task '{}' added", text),
            Message::TaskUpdated(text) => format!("Task updated to '{}'", text),
            Message::TaskRemoved(text) => format!("Task '{}' removed", text),
            Message::TaskRemovedEmptyEdit(text) => format!("Task '{}' removed (edited to empty text)", text),
            Message::TaskCompleted(text) => format!("Task '{}' marked as done", text),
            Message::TaskReopened(text) => format!("Task '{}' marked as not done", text),
            Message::TaskNotFound(id) => format!("No task matches id '{}'", id),
            Message::TaskIdAmbiguous(id) => format!("Id '{}' matches more than one task, use a longer prefix", id),
            Message::NoTasks => "No tasks yet".to_string(),

            // === BULK OPERATION MESSAGES ===
            Message::AllMarkedCompleted(count) => format!("Marked all {} tasks as done", count),
            Message::AllMarkedActive(count) => format!("Marked all {} tasks as not done", count),
            Message::CompletedCleared(count) => format!("Removed {} completed task{}", count, if *count == 1 { "" } else { "s" }),
            Message::NoCompletedTasks => "No completed tasks to clear".to_string(),

            // === FILTER MESSAGES ===
            Message::FilterSet(filter) => format!("Filter set to {}", filter),
            Message::CurrentFilter(filter) => format!("Filter: {}", filter),

            // === VIEW MESSAGES ===
            Message::ItemsLeft(label) => label.clone(),
            Message::AllTasksCompleted => "All tasks completed".to_string(),
            Message::ClearCompletedHint => "Run 'tisk clear' to remove completed tasks".to_string(),

            // === EDIT SESSION MESSAGES ===
            Message::EditingTask(text) => format!("Editing task '{}'", text),
            Message::EditCancelled => "Edit cancelled, task unchanged".to_string(),
            Message::PromptTaskText => "Task text".to_string(),
            Message::PromptSelectTask => "Select a task to edit".to_string(),
        };
        write!(f, "{}", message)
    }
}
