//! Persistence adapter between the task store and durable JSON storage.
//!
//! Two files live under the application data directory: `tasks.json` holds
//! the full ordered record list, `filter.json` the active view filter. Both
//! are overwritten whole on every save; persisted order always matches the
//! in-memory display order (newest first) and is never re-sorted here.
//!
//! The read path fails soft: an absent or unparsable file yields the
//! documented defaults (empty list, `All` filter) and never an error.
//! Only the write path surfaces failures.

use super::data_storage::DataStorage;
use super::task::{Task, TaskFilter};
use crate::msg_debug;
use std::fs::{self, File};
use std::path::PathBuf;
use thiserror::Error;

pub const TASKS_FILE_NAME: &str = "tasks.json";
pub const FILTER_FILE_NAME: &str = "filter.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access storage file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode storage file: {0}")]
    Encode(#[from] serde_json::Error),
}

pub struct Storage {
    tasks_path: PathBuf,
    filter_path: PathBuf,
}

impl Storage {
    pub fn new() -> Result<Self, StorageError> {
        let data_storage = DataStorage::new();
        Ok(Storage {
            tasks_path: data_storage.get_path(TASKS_FILE_NAME)?,
            filter_path: data_storage.get_path(FILTER_FILE_NAME)?,
        })
    }

    /// Writes the full record list, replacing any prior value.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let file = File::create(&self.tasks_path)?;
        serde_json::to_writer_pretty(&file, &tasks)?;
        Ok(())
    }

    /// Reads the record list back, substituting an empty list when the file
    /// is absent or unparsable. Records that lost their text, or were saved
    /// without an id by an older writer, are repaired or dropped here.
    pub fn load(&self) -> Vec<Task> {
        let raw = match fs::read_to_string(&self.tasks_path) {
            Ok(raw) => raw,
            Err(err) => {
                msg_debug!(format!("no readable task storage ({}), starting empty", err));
                return Vec::new();
            }
        };
        let mut tasks: Vec<Task> = match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(err) => {
                msg_debug!(format!("malformed task storage ({}), starting empty", err));
                return Vec::new();
            }
        };
        // Empty text is never persisted by this writer; tolerate foreign
        // values by dropping such records instead of rendering them.
        tasks.retain(|task| !task.text.trim().is_empty());
        tasks
    }

    /// Persists the active filter independently from the tasks.
    pub fn save_filter(&self, filter: TaskFilter) -> Result<(), StorageError> {
        let file = File::create(&self.filter_path)?;
        serde_json::to_writer(&file, &filter)?;
        Ok(())
    }

    /// Reads the active filter, defaulting to `All` when absent or invalid.
    pub fn load_filter(&self) -> TaskFilter {
        let raw = match fs::read_to_string(&self.filter_path) {
            Ok(raw) => raw,
            Err(_) => return TaskFilter::default(),
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }
}
