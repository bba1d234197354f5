//! Pure projection from the task store to a renderable list view.
//!
//! Building the view model performs no I/O and touches no terminal, so the
//! projection rules (filtering, footer visibility, counter pluralization)
//! are testable without a rendering environment. The console renderer in
//! [`view`](crate::libs::view) consumes the result as-is.

use super::store::TaskStore;
use super::task::TaskFilter;

/// One visible list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Footer controls state. Absent entirely while the store is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    /// Remaining-count label, e.g. "1 item left" or "3 items left".
    pub items_left: String,
    /// Whether the clear-completed control is usable.
    pub clear_enabled: bool,
    /// Whether every record in the store is completed.
    pub all_completed: bool,
}

/// Complete description of what the list should show for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub filter: TaskFilter,
    pub rows: Vec<TaskRow>,
    pub footer: Option<Footer>,
}

impl ListView {
    /// Projects `(store, filter)` onto the visible list. Rebuilt in full on
    /// every state change; no incremental diffing.
    pub fn build(store: &TaskStore, filter: TaskFilter) -> Self {
        let rows = store
            .filtered(filter)
            .map(|task| TaskRow {
                id: task.id.clone(),
                text: task.text.clone(),
                completed: task.is_completed,
            })
            .collect();

        // Footer and filter bar are hidden whenever the store holds nothing,
        // even if the current filter alone would leave the list blank.
        let footer = if store.is_empty() {
            None
        } else {
            Some(Footer {
                items_left: items_left_label(store.active_count()),
                clear_enabled: store.has_completed(),
                all_completed: store.all_completed(),
            })
        };

        ListView { filter, rows, footer }
    }
}

/// "N items left" label with singular form for exactly one.
pub fn items_left_label(active: usize) -> String {
    format!("{} item{} left", active, if active == 1 { "" } else { "s" })
}
