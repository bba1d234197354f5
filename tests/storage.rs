#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tisk::libs::data_storage::DataStorage;
    use tisk::libs::storage::{Storage, FILTER_FILE_NAME, TASKS_FILE_NAME};
    use tisk::libs::store::TaskStore;
    use tisk::libs::task::{Task, TaskFilter};

    // Storage resolves its paths from process-wide environment variables,
    // so tests that repoint HOME must not overlap in time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct StorageTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StorageTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_without_file_yields_empty_list(_ctx: &mut StorageTestContext) {
        let storage = Storage::new().unwrap();
        assert!(storage.load().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_load_round_trip_preserves_content_and_order(_ctx: &mut StorageTestContext) {
        let mut store = TaskStore::default();
        store.add("A");
        store.add("B");
        let id = store.add("C").unwrap().id.clone();
        store.toggle_completed(&id);

        let storage = Storage::new().unwrap();
        storage.save(store.tasks()).unwrap();

        let loaded = storage.load();
        assert_eq!(loaded, store.tasks());
        let texts: Vec<&str> = loaded.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["C", "B", "A"]);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_with_malformed_json_yields_empty_list(_ctx: &mut StorageTestContext) {
        let path = DataStorage::new().get_path(TASKS_FILE_NAME).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let storage = Storage::new().unwrap();
        assert!(storage.load().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_tolerates_records_without_ids(_ctx: &mut StorageTestContext) {
        // An older writer persisted only {text, isCompleted}.
        let path = DataStorage::new().get_path(TASKS_FILE_NAME).unwrap();
        fs::write(
            &path,
            r#"[{"text":"Buy milk","isCompleted":true},{"text":"Call mom","isCompleted":false}]"#,
        )
        .unwrap();

        let storage = Storage::new().unwrap();
        let loaded = storage.load();
        assert_eq!(loaded.len(), 2);
        assert!(loaded[0].is_completed);
        assert!(!loaded[0].id.is_empty());
        assert_ne!(loaded[0].id, loaded[1].id);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_drops_records_with_empty_text(_ctx: &mut StorageTestContext) {
        let path = DataStorage::new().get_path(TASKS_FILE_NAME).unwrap();
        fs::write(
            &path,
            r#"[{"text":"","isCompleted":false},{"text":"Keep me","isCompleted":false}]"#,
        )
        .unwrap();

        let storage = Storage::new().unwrap();
        let loaded = storage.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "Keep me");
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_persisted_records_use_the_documented_keys(_ctx: &mut StorageTestContext) {
        let storage = Storage::new().unwrap();
        storage.save(&[Task::new("Buy milk")]).unwrap();

        let raw = fs::read_to_string(DataStorage::new().get_path(TASKS_FILE_NAME).unwrap()).unwrap();
        assert!(raw.contains("\"isCompleted\""));
        assert!(raw.contains("\"text\""));
        assert!(raw.contains("\"id\""));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_filter_defaults_to_all(_ctx: &mut StorageTestContext) {
        let storage = Storage::new().unwrap();
        assert_eq!(storage.load_filter(), TaskFilter::All);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_filter_round_trip(_ctx: &mut StorageTestContext) {
        let storage = Storage::new().unwrap();
        storage.save_filter(TaskFilter::Completed).unwrap();
        assert_eq!(storage.load_filter(), TaskFilter::Completed);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_malformed_filter_falls_back_to_all(_ctx: &mut StorageTestContext) {
        let path = DataStorage::new().get_path(FILTER_FILE_NAME).unwrap();
        fs::write(&path, "\"Yesterday\"").unwrap();

        let storage = Storage::new().unwrap();
        assert_eq!(storage.load_filter(), TaskFilter::All);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_filter_is_stored_separately_from_tasks(_ctx: &mut StorageTestContext) {
        let storage = Storage::new().unwrap();
        storage.save(&[Task::new("Buy milk")]).unwrap();
        storage.save_filter(TaskFilter::Active).unwrap();

        // Clearing the tasks file must not disturb the filter.
        storage.save(&[]).unwrap();
        assert_eq!(storage.load_filter(), TaskFilter::Active);
        assert!(storage.load().is_empty());
    }
}
