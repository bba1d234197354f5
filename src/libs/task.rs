use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// A single task record: the durable unit of data for one list item.
///
/// Records are owned by the [`TaskStore`](crate::libs::store::TaskStore);
/// everything rendered on screen is a disposable projection of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, stable for the record's lifetime.
    #[serde(default = "fresh_id")]
    pub id: String,
    pub text: String,
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

impl Task {
    /// Creates a new incomplete task with a fresh id.
    ///
    /// The text is stored trimmed; callers are responsible for rejecting
    /// input that trims down to nothing.
    pub fn new(text: &str) -> Self {
        Task {
            id: fresh_id(),
            text: text.trim().to_string(),
            is_completed: false,
        }
    }
}

/// Visibility predicate applied to the rendered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.is_completed,
            TaskFilter::Completed => task.is_completed,
        }
    }
}

impl Display for TaskFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        };
        write!(f, "{}", name)
    }
}
