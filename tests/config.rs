#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tasker::commands::open_tasks;
    use tasker::db::tasks::NewTask;
    use tasker::libs::config::{Config, STORE_FILE_NAME};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the home/appdata directory at a temporary directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        custom_store: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            let custom_store = temp_dir.path().join("custom").join("my-tasks.json");
            ConfigTestContext {
                _temp_dir: temp_dir,
                custom_store,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.storage_file.is_none());
        assert_eq!(serde_json::to_string(&config).unwrap(), "{}");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_lifecycle(ctx: &mut ConfigTestContext) {
        // No file yet: defaults, store next to the config
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        let default_store = config.store_path().unwrap();
        assert!(default_store.ends_with(STORE_FILE_NAME));
        assert!(default_store.parent().unwrap().exists());

        // Saved settings are read back
        let config = Config {
            storage_file: Some(ctx.custom_store.clone()),
        };
        config.save().unwrap();
        let read = Config::read().unwrap();
        assert_eq!(read, config);
        assert_eq!(read.store_path().unwrap(), ctx.custom_store);

        // The configured store is what the CLI opens
        let mut tasks = open_tasks(None).unwrap();
        assert_eq!(tasks.path(), ctx.custom_store.as_path());
        tasks.add_task(NewTask::new("Configured")).unwrap();
        assert!(ctx.custom_store.exists());

        // An explicit file wins over the configuration
        let explicit = ctx.custom_store.with_file_name("explicit.json");
        assert_eq!(open_tasks(Some(explicit.clone())).unwrap().path(), explicit.as_path());

        // Reset returns to defaults
        Config::reset().unwrap();
        assert_eq!(Config::read().unwrap(), Config::default());
    }
}
