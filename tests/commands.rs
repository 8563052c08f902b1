#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::commands::{add, clear, delete, done, edit, import, list, path};
    use tudu::db::store::TaskStore;
    use tudu::libs::task::{Task, TaskFilter};

    struct CommandTestContext {
        temp_dir: TempDir,
        store: TaskStore,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = TaskStore::open(temp_dir.path().join("tasks.json")).unwrap();
            CommandTestContext { temp_dir, store }
        }
    }

    fn add_task(store: &mut TaskStore, description: &str) {
        add::cmd(
            add::AddArgs {
                description: description.to_string(),
            },
            store,
        )
        .unwrap();
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_trims_description(ctx: &mut CommandTestContext) {
        add_task(&mut ctx.store, "  buy milk  ");

        assert_eq!(ctx.store.list().unwrap(), vec![Task::with_id(1, "buy milk", false)]);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_rejects_blank_description(ctx: &mut CommandTestContext) {
        let result = add::cmd(
            add::AddArgs {
                description: "   ".to_string(),
            },
            &mut ctx.store,
        );

        assert!(result.is_err());
        assert!(ctx.store.list().unwrap().is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_done_and_undone(ctx: &mut CommandTestContext) {
        add_task(&mut ctx.store, "walk dog");

        done::cmd(done::CompletionArgs { id: 1 }, true, &ctx.store).unwrap();
        assert!(ctx.store.list().unwrap()[0].completed);

        done::cmd(done::CompletionArgs { id: 1 }, false, &ctx.store).unwrap();
        assert!(!ctx.store.list().unwrap()[0].completed);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_done_unknown_id_is_not_an_error(ctx: &mut CommandTestContext) {
        add_task(&mut ctx.store, "walk dog");

        done::cmd(done::CompletionArgs { id: 9 }, true, &ctx.store).unwrap();
        assert!(!ctx.store.list().unwrap()[0].completed);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_delete_with_yes(ctx: &mut CommandTestContext) {
        add_task(&mut ctx.store, "one");
        add_task(&mut ctx.store, "two");

        delete::cmd(delete::DeleteArgs { id: 1, yes: true }, &ctx.store).unwrap();
        assert_eq!(ctx.store.list().unwrap(), vec![Task::with_id(2, "two", false)]);

        // Unknown id only warns
        delete::cmd(delete::DeleteArgs { id: 1, yes: true }, &ctx.store).unwrap();
        assert_eq!(ctx.store.list().unwrap().len(), 1);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_clear_with_yes(ctx: &mut CommandTestContext) {
        add_task(&mut ctx.store, "one");
        add_task(&mut ctx.store, "two");
        ctx.store.set_completion(2, true).unwrap();

        clear::cmd(clear::ClearArgs { yes: true }, &ctx.store).unwrap();
        assert_eq!(ctx.store.list().unwrap(), vec![Task::with_id(1, "one", false)]);

        // Nothing completed: no prompt even without --yes
        clear::cmd(clear::ClearArgs { yes: false }, &ctx.store).unwrap();
        assert_eq!(ctx.store.list().unwrap().len(), 1);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_edit_flushes_working_copy(ctx: &mut CommandTestContext) {
        add_task(&mut ctx.store, "one");
        add_task(&mut ctx.store, "two");
        ctx.store.set_completion(1, true).unwrap();

        edit::cmd(
            edit::EditArgs {
                id: 2,
                description: Some("two, revised".to_string()),
            },
            &ctx.store,
        )
        .unwrap();

        assert_eq!(
            ctx.store.list().unwrap(),
            vec![Task::with_id(1, "one", true), Task::with_id(2, "two, revised", false)]
        );
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_edit_unknown_id_and_unchanged(ctx: &mut CommandTestContext) {
        add_task(&mut ctx.store, "one");
        let before = fs::read_to_string(ctx.store.path()).unwrap();

        edit::cmd(
            edit::EditArgs {
                id: 5,
                description: Some("x".to_string()),
            },
            &ctx.store,
        )
        .unwrap();
        edit::cmd(
            edit::EditArgs {
                id: 1,
                description: Some("one".to_string()),
            },
            &ctx.store,
        )
        .unwrap();

        assert_eq!(fs::read_to_string(ctx.store.path()).unwrap(), before);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_edit_rejects_blank_description(ctx: &mut CommandTestContext) {
        add_task(&mut ctx.store, "one");

        let result = edit::cmd(
            edit::EditArgs {
                id: 1,
                description: Some(" ".to_string()),
            },
            &ctx.store,
        );

        assert!(result.is_err());
        assert_eq!(ctx.store.list().unwrap()[0].description, "one");
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_import_replaces_list(ctx: &mut CommandTestContext) {
        add_task(&mut ctx.store, "old");
        let source = ctx.temp_dir.path().join("backup.json");
        fs::write(
            &source,
            r#"[{"id": 4, "description": "four", "completed": true}, {"id": 2, "description": "two", "completed": false}]"#,
        )
        .unwrap();

        import::cmd(import::ImportArgs { file: source, yes: true }, &mut ctx.store).unwrap();

        assert_eq!(
            ctx.store.list().unwrap(),
            vec![Task::with_id(4, "four", true), Task::with_id(2, "two", false)]
        );
        assert_eq!(ctx.store.next_id(), 5);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_import_rejects_bad_source(ctx: &mut CommandTestContext) {
        add_task(&mut ctx.store, "keep me");
        let source = ctx.temp_dir.path().join("bad.json");
        fs::write(&source, r#"[{"id": -1, "description": "unsaved", "completed": false}]"#).unwrap();

        let result = import::cmd(import::ImportArgs { file: source, yes: true }, &mut ctx.store);

        assert!(result.is_err());
        assert_eq!(ctx.store.list().unwrap(), vec![Task::with_id(1, "keep me", false)]);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_list_and_path_succeed(ctx: &mut CommandTestContext) {
        list::cmd(list::ListArgs::default(), &ctx.store).unwrap();

        add_task(&mut ctx.store, "one");
        ctx.store.set_completion(1, true).unwrap();

        let completed_only = list::ListArgs {
            pending: false,
            completed: true,
        };
        assert_eq!(completed_only.filter(), TaskFilter::Completed);
        list::cmd(completed_only, &ctx.store).unwrap();
        list::cmd(
            list::ListArgs {
                pending: true,
                completed: false,
            },
            &ctx.store,
        )
        .unwrap();

        path::cmd(&ctx.store).unwrap();
    }
}
