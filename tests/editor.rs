#[cfg(test)]
mod tests {
    use tisk::libs::editor::{EditOutcome, EditSession};
    use tisk::libs::task::Task;

    #[test]
    fn test_session_captures_record_state() {
        let task = Task::new("Buy milk");
        let session = EditSession::begin(&task);
        assert_eq!(session.task_id(), task.id);
        assert_eq!(session.original(), "Buy milk");
    }

    #[test]
    fn test_non_empty_text_commits_trimmed() {
        assert_eq!(
            EditSession::classify("  Buy bread  "),
            EditOutcome::Committed("Buy bread".to_string())
        );
    }

    #[test]
    fn test_empty_text_deletes() {
        assert_eq!(EditSession::classify(""), EditOutcome::Deleted);
        assert_eq!(EditSession::classify("   "), EditOutcome::Deleted);
        assert_eq!(EditSession::classify("\t\n"), EditOutcome::Deleted);
    }
}
