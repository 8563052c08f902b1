#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::commands::init::{self, InitArgs};
    use tudu::commands::open_store;
    use tudu::libs::config::{Config, CONFIG_FILE_NAME, TASKS_FILE_ENV_VAR};
    use tudu::libs::data_storage::DataStorage;

    // Tests in this file rewrite process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(TASKS_FILE_ENV_VAR);

            ConfigTestContext { temp_dir, _guard: guard }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_data_storage_under_home(ctx: &mut ConfigTestContext) {
        let storage = DataStorage::new();
        let path = storage.get_path("test_file.txt").unwrap();

        assert!(path.starts_with(ctx.temp_dir.path()));
        assert!(path.ends_with("test_file.txt"));
        assert!(storage.base_path().exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_without_file_returns_default(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.tasks_file.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            tasks_file: Some(ctx.temp_dir.path().join("custom.json")),
        };

        let saved_path = config.save().unwrap();
        assert!(saved_path.ends_with(CONFIG_FILE_NAME));

        assert_eq!(Config::read().unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_rejects_corrupt_config(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, "not json").unwrap();

        assert!(Config::read().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_error_names_config_file(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "not json").unwrap();

        let err = Config::read().unwrap_err();
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_file_flag_ignores_corrupt_config(ctx: &mut ConfigTestContext) {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(config_path, "not json").unwrap();
        let flag = ctx.temp_dir.path().join("flag.json");

        let mut store = open_store(Some(&flag)).unwrap();
        store.add("still works").unwrap();

        assert_eq!(store.path(), flag.as_path());
        assert!(open_store(None).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_tasks_file_in_data_dir(_ctx: &mut ConfigTestContext) {
        let path = Config::default().tasks_file_path(None).unwrap();
        assert_eq!(path, DataStorage::new().get_path("tasks.json").unwrap());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_tasks_file_precedence(ctx: &mut ConfigTestContext) {
        let from_config = ctx.temp_dir.path().join("config.tasks.json");
        let from_env = ctx.temp_dir.path().join("env.tasks.json");
        let from_flag = ctx.temp_dir.path().join("flag.tasks.json");
        let config = Config {
            tasks_file: Some(from_config.clone()),
        };

        assert_eq!(config.tasks_file_path(None).unwrap(), from_config);

        std::env::set_var(TASKS_FILE_ENV_VAR, &from_env);
        assert_eq!(config.tasks_file_path(None).unwrap(), from_env);
        assert_eq!(config.tasks_file_path(Some(&from_flag)).unwrap(), from_flag);

        std::env::remove_var(TASKS_FILE_ENV_VAR);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_relative_tasks_file_resolved_against_cwd(_ctx: &mut ConfigTestContext) {
        let config = Config {
            tasks_file: Some(PathBuf::from("relative.json")),
        };

        let path = config.tasks_file_path(None).unwrap();
        assert!(path.is_absolute());
        assert_eq!(path, std::env::current_dir().unwrap().join("relative.json"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_open_store_uses_configured_file(ctx: &mut ConfigTestContext) {
        let tasks_file = ctx.temp_dir.path().join("nested").join("mine.json");
        Config {
            tasks_file: Some(tasks_file.clone()),
        }
        .save()
        .unwrap();

        let mut store = open_store(None).unwrap();
        store.add("configured").unwrap();

        assert_eq!(store.path(), tasks_file.as_path());
        assert!(tasks_file.exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_init_delete_removes_config(_ctx: &mut ConfigTestContext) {
        let saved_path = Config::default().save().unwrap();
        assert!(saved_path.exists());

        init::cmd(InitArgs { delete: true }).unwrap();
        assert!(!saved_path.exists());

        // Deleting again is harmless
        init::cmd(InitArgs { delete: true }).unwrap();
    }
}
