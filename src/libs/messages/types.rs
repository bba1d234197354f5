use crate::libs::task::TaskFilter;

/// Every user-facing message the application can emit.
///
/// Text lives in the `Display` implementation; the rest of the code only
/// ever names a variant, so wording changes stay in one place.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskUpdated(String),
    TaskRemoved(String),
    TaskRemovedEmptyEdit(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskNotFound(String),
    TaskIdAmbiguous(String),
    NoTasks,

    // === BULK OPERATION MESSAGES ===
    AllMarkedCompleted(usize),
    AllMarkedActive(usize),
    CompletedCleared(usize),
    NoCompletedTasks,

    // === FILTER MESSAGES ===
    FilterSet(TaskFilter),
    CurrentFilter(TaskFilter),

    // === VIEW MESSAGES ===
    ItemsLeft(String),
    AllTasksCompleted,
    ClearCompletedHint,

    // === EDIT SESSION MESSAGES ===
    EditingTask(String),
    EditCancelled,
    PromptTaskText,
    PromptSelectTask,
}
