#[cfg(test)]
mod tests {
    use reclog::libs::config::{Config, CONFIG_FILE_NAME};
    use reclog::libs::data_storage::DataStorage;
    use reclog::libs::record::{STATUS_COMPLETED, STATUS_PENDING};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points configuration at a throwaway data directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base_path(temp_dir.path().join("reclog"));
            ConfigTestContext { _temp_dir: temp_dir, storage }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.weekly_cap, None);
        assert_eq!(config.default_status, STATUS_PENDING);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config, Config::default());
        // reading creates the data directory but not the file
        assert!(ctx.storage.base_path().exists());
        assert!(!ctx.storage.base_path().join(CONFIG_FILE_NAME).exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            weekly_cap: Some(37.5),
            default_status: STATUS_COMPLETED.to_string(),
        };
        config.save_to(&ctx.storage).unwrap();

        let read_config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, r#"{"weekly_cap": 10}"#).unwrap();

        let config = Config::read_from(&ctx.storage).unwrap();
        assert_eq!(config.weekly_cap, Some(10.0));
        assert_eq!(config.default_status, STATUS_PENDING);
    }
}
