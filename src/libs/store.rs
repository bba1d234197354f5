//! In-memory task collection, the single source of truth for the list.
//!
//! The store owns an ordered collection of [`Task`] records (newest first)
//! and exposes every mutation the command layer can apply. Mutating
//! operations report whether they changed anything so callers persist and
//! re-render only when something actually happened.

use super::task::{Task, TaskFilter};

/// Result of applying an edited text to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditApplied {
    /// The record's text was replaced with the trimmed value.
    Updated,
    /// The edit produced empty text, so the record was removed instead.
    Removed,
    /// No record with the given id exists.
    NotFound,
}

/// Outcome of resolving a user-supplied id or id prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdMatch {
    Unique(String),
    Ambiguous,
    NotFound,
}

/// Ordered collection of task records, newest first.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Builds a store from previously persisted records, keeping their order.
    pub fn new(tasks: Vec<Task>) -> Self {
        TaskStore { tasks }
    }

    /// All records in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Adds a new incomplete task in front of the list.
    ///
    /// Whitespace-only text is refused and leaves the store untouched.
    pub fn add(&mut self, text: &str) -> Option<&Task> {
        if text.trim().is_empty() {
            return None;
        }
        self.tasks.insert(0, Task::new(text));
        self.tasks.first()
    }

    /// Removes the record with the given id. Returns `false` if absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Flips the completion flag of the record with the given id.
    pub fn toggle_completed(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.is_completed = !task.is_completed;
                true
            }
            None => false,
        }
    }

    /// Replaces a record's text with the trimmed value; an edit that trims
    /// down to nothing removes the record instead.
    pub fn update_text(&mut self, id: &str, new_text: &str) -> EditApplied {
        let trimmed = new_text.trim();
        if trimmed.is_empty() {
            return if self.remove(id) { EditApplied::Removed } else { EditApplied::NotFound };
        }
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = trimmed.to_string();
                EditApplied::Updated
            }
            None => EditApplied::NotFound,
        }
    }

    /// Bulk toggle: if every record is completed, mark all incomplete;
    /// otherwise mark all complete. Returns `false` when the store is empty.
    pub fn toggle_all(&mut self) -> bool {
        if self.tasks.is_empty() {
            return false;
        }
        let target = !self.all_completed();
        for task in &mut self.tasks {
            task.is_completed = target;
        }
        true
    }

    /// Removes every completed record, returning how many were dropped.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.is_completed);
        before - self.tasks.len()
    }

    /// Lazy view of the records matching the filter, in store order.
    pub fn filtered(&self, filter: TaskFilter) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| filter.matches(t))
    }

    /// Count of records not yet completed.
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.is_completed).count()
    }

    pub fn all_completed(&self) -> bool {
        self.tasks.iter().all(|t| t.is_completed)
    }

    pub fn has_completed(&self) -> bool {
        self.tasks.iter().any(|t| t.is_completed)
    }

    /// Resolves an exact id or an unambiguous id prefix to a full id.
    pub fn resolve_id(&self, given: &str) -> IdMatch {
        if given.is_empty() {
            return IdMatch::NotFound;
        }
        if self.tasks.iter().any(|t| t.id == given) {
            return IdMatch::Unique(given.to_string());
        }
        let mut matches = self.tasks.iter().filter(|t| t.id.starts_with(given));
        match (matches.next(), matches.next()) {
            (Some(task), None) => IdMatch::Unique(task.id.clone()),
            (Some(_), Some(_)) => IdMatch::Ambiguous,
            (None, _) => IdMatch::NotFound,
        }
    }
}
