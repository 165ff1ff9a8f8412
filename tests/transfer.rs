#[cfg(test)]
mod tests {
    use reclog::db::kv_store::KvStore;
    use reclog::libs::error::RecordError;
    use reclog::libs::record::{RecordInput, STATUS_COMPLETED};
    use reclog::libs::store::RecordStore;
    use reclog::libs::transfer::{import_file, to_json_string, ExportFormat, Exporter};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TransferTestContext {
        temp_dir: TempDir,
        store: RecordStore,
    }

    impl TestContext for TransferTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let kv = KvStore::open(temp_dir.path().join("reclog.db")).unwrap();
            let mut store = RecordStore::load(kv).unwrap();

            store.create(&RecordInput::new("Physics lab", "2025-03-04").duration("2").tag("study")).unwrap();
            store
                .create(&RecordInput::new("Gym, legs", "2025-03-01").duration("1.25").tag("health").status(STATUS_COMPLETED))
                .unwrap();
            store.create(&RecordInput::new("Call \"home\"", "2025-03-02")).unwrap();

            TransferTestContext { temp_dir, store }
        }
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_export_then_import_round_trips(ctx: &mut TransferTestContext) {
        let output = ctx.temp_dir.path().join("records.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output.clone()));
        let written = exporter.export(ctx.store.list()).unwrap();
        assert_eq!(written, output);

        let imported = import_file(&output).unwrap();
        assert_eq!(imported.as_slice(), ctx.store.list());
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_json_export_is_pretty_printed(ctx: &mut TransferTestContext) {
        let json = to_json_string(ctx.store.list()).unwrap();
        assert!(json.starts_with("[\n  {\n    \"id\": \"rec_"));
        assert!(json.contains("\"createdAt\""));
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_import_replaces_store(ctx: &mut TransferTestContext) {
        let path = ctx.temp_dir.path().join("incoming.json");
        fs::write(&path, r#"[{"id": "rec_1", "title": "Only", "date": "2025-06-01", "duration": 3, "tag": "", "status": "pending"}]"#)
            .unwrap();

        let records = import_file(&path).unwrap();
        ctx.store.replace_all(records).unwrap();

        assert_eq!(ctx.store.len(), 1);
        assert_eq!(ctx.store.get("rec_1").map(|r| r.duration), Some(3.0));
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_import_rejects_non_array(ctx: &mut TransferTestContext) {
        let before = ctx.store.list().to_vec();
        let path = ctx.temp_dir.path().join("string.json");
        fs::write(&path, "\"not an array\"").unwrap();

        let result = import_file(&path);
        assert!(matches!(result, Err(RecordError::ImportFormat)));
        assert_eq!(ctx.store.list(), before.as_slice());
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_import_rejects_unparsable_json(ctx: &mut TransferTestContext) {
        let path = ctx.temp_dir.path().join("broken.json");
        fs::write(&path, "[{\"id\": ").unwrap();

        assert!(matches!(import_file(&path), Err(RecordError::InvalidJson(_))));
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_import_trusts_payload(ctx: &mut TransferTestContext) {
        // Duplicate ids and missing titles are kept verbatim.
        let path = ctx.temp_dir.path().join("loose.json");
        fs::write(&path, r#"[{"id": "dup", "date": "later"}, {"id": "dup", "title": "Second"}]"#).unwrap();

        let records = import_file(&path).unwrap();
        ctx.store.replace_all(records).unwrap();

        assert_eq!(ctx.store.len(), 2);
        assert_eq!(ctx.store.list()[0].title, "");
        assert_eq!(ctx.store.list()[0].date, "later");
    }

    #[test_context(TransferTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut TransferTestContext) {
        let output = ctx.temp_dir.path().join("records.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output.clone()));
        exporter.export(ctx.store.list()).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("id,title,date,duration,tag,status,createdAt,updatedAt"));
        assert!(content.contains("\"Gym, legs\""));
        assert!(content.contains("\"Call \"\"home\"\"\""));
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn test_export_defaults() {
        assert_eq!(ExportFormat::Json.default_file_name(), "records.json");
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
        let exporter = Exporter::new(ExportFormat::Csv, None);
        assert_eq!(exporter.output_path().to_str(), Some("records.csv"));
    }
}
