#[cfg(test)]
mod tests {
    use reclog::db::kv_store::KvStore;
    use reclog::libs::error::RecordError;
    use reclog::libs::record::{RecordInput, STATUS_COMPLETED};
    use reclog::libs::store::{RecordStore, RECORDS_KEY};
    use rusqlite::Connection;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        temp_dir: TempDir,
    }

    impl StoreTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("reclog.db")
        }

        fn store(&self) -> RecordStore {
            RecordStore::load(KvStore::open(self.db_path()).unwrap()).unwrap()
        }
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            StoreTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_empty_storage_loads_empty_collection(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_create_is_retrievable(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();

        let record = store.create(&RecordInput::new("Physics lab", "2025-03-04").tag("study")).unwrap();
        assert!(record.id.starts_with("rec_"));
        assert_eq!(record.created_at, record.updated_at);

        let fetched = store.get(&record.id).unwrap();
        assert_eq!(fetched, &record);
        assert_eq!(fetched.duration, 0.0);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_create_coerces_unparsable_duration(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();

        let record = store.create(&RecordInput::new("Essay", "2025-03-05").duration("a while")).unwrap();
        assert_eq!(record.duration, 0.0);

        let record = store.create(&RecordInput::new("Essay", "2025-03-05").duration("-4")).unwrap();
        assert_eq!(record.duration, 0.0);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_identical_creates_get_distinct_ids(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        let input = RecordInput::new("Same", "2025-01-01").duration("1");

        let first = store.create(&input).unwrap();
        let second = store.create(&input).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_create_validation_does_not_mutate(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();

        let result = store.create(&RecordInput::new("", "2025-01-01"));
        assert!(matches!(result, Err(RecordError::MissingRequiredFields)));

        let result = store.create(&RecordInput::new("Title", ""));
        assert!(matches!(result, Err(RecordError::MissingRequiredFields)));

        assert!(store.is_empty());
        assert!(KvStore::open(ctx.db_path()).unwrap().get(RECORDS_KEY).unwrap().is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_preserves_identity(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        let original = store.create(&RecordInput::new("Draft", "2025-02-01").duration("1")).unwrap();

        let input = RecordInput::new("Final", "2025-02-02").duration("2.5").tag("writing").status(STATUS_COMPLETED);
        let updated = store.update(&original.id, &input).unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);
        assert_eq!(updated.title, "Final");
        assert_eq!(updated.date, "2025-02-02");
        assert_eq!(updated.duration, 2.5);
        assert_eq!(updated.tag, "writing");
        assert!(updated.is_completed());
        assert_eq!(store.get(&original.id), Some(&updated));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_missing_or_invalid(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        let original = store.create(&RecordInput::new("Keep", "2025-02-01")).unwrap();

        let result = store.update("rec_missing", &RecordInput::new("X", "2025-02-01"));
        assert!(matches!(result, Err(RecordError::NotFound(id)) if id == "rec_missing"));

        let result = store.update(&original.id, &RecordInput::new("  ", "2025-02-01"));
        assert!(matches!(result, Err(RecordError::MissingRequiredFields)));

        assert_eq!(store.get(&original.id), Some(&original));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_removes_exactly_one(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        let a = store.create(&RecordInput::new("A", "2025-01-01").duration("1")).unwrap();
        let b = store.create(&RecordInput::new("B", "2025-01-02").duration("2")).unwrap();
        let c = store.create(&RecordInput::new("C", "2025-01-03").duration("3")).unwrap();

        let removed = store.delete(&b.id).unwrap();
        assert_eq!(removed, Some(b));
        assert_eq!(store.list(), &[a.clone(), c.clone()]);

        assert_eq!(store.delete("rec_missing").unwrap(), None);
        assert_eq!(store.list(), &[a, c]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_mutations_are_persisted(ctx: &mut StoreTestContext) {
        let (kept, deleted) = {
            let mut store = ctx.store();
            let kept = store.create(&RecordInput::new("Kept", "2025-01-01")).unwrap();
            let deleted = store.create(&RecordInput::new("Deleted", "2025-01-02")).unwrap();
            store.update(&kept.id, &RecordInput::new("Kept v2", "2025-01-01")).unwrap();
            store.delete(&deleted.id).unwrap();
            (kept, deleted)
        };

        let reopened = ctx.store();
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.get(&kept.id).map(|r| r.title.as_str()), Some("Kept v2"));
        assert!(reopened.get(&deleted.id).is_none());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_replace_all_supersedes_collection(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        store.create(&RecordInput::new("Old", "2025-01-01")).unwrap();

        let mut other = RecordStore::load(KvStore::open_in_memory().unwrap()).unwrap();
        let incoming = other.create(&RecordInput::new("New", "2025-05-05").duration("4")).unwrap();

        store.replace_all(vec![incoming.clone()]).unwrap();
        assert_eq!(store.list(), &[incoming.clone()]);
        assert_eq!(ctx.store().list(), &[incoming]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_corrupt_blob_is_reported(ctx: &mut StoreTestContext) {
        let mut kv = KvStore::open(ctx.db_path()).unwrap();
        kv.set(RECORDS_KEY, "{\"not\": \"an array\"}").unwrap();

        let result = RecordStore::load(kv);
        assert!(matches!(result, Err(RecordError::ImportFormat)));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_failed_write_restores_collection(ctx: &mut StoreTestContext) {
        let mut store = ctx.store();
        let first = store.create(&RecordInput::new("First", "2025-01-01").duration("1")).unwrap();
        store.create(&RecordInput::new("Second", "2025-01-02")).unwrap();
        let before = store.list().to_vec();

        // Pull the table out from under the open store.
        Connection::open(ctx.db_path()).unwrap().execute("DROP TABLE storage", []).unwrap();

        let result = store.create(&RecordInput::new("Third", "2025-01-03"));
        assert!(matches!(result, Err(RecordError::Storage(_))));
        assert_eq!(store.list(), before.as_slice());

        let result = store.update(&first.id, &RecordInput::new("Renamed", "2025-01-01"));
        assert!(matches!(result, Err(RecordError::Storage(_))));
        assert_eq!(store.list(), before.as_slice());

        let result = store.delete(&first.id);
        assert!(matches!(result, Err(RecordError::Storage(_))));
        assert_eq!(store.list(), before.as_slice());

        let result = store.replace_all(Vec::new());
        assert!(matches!(result, Err(RecordError::Storage(_))));
        assert_eq!(store.list(), before.as_slice());
    }
}
