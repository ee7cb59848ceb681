#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tasker::db::tasks::{NewTask, Tasks};
    use tasker::libs::error::TaskError;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
        store: PathBuf,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = temp_dir.path().join("tasks.json");
            TaskTestContext { _temp_dir: temp_dir, store }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_and_get_task(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.store);

        let id = tasks
            .add_task(
                NewTask::new("Test Task")
                    .description("This is a test task")
                    .priority(1)
                    .due_date("2023-12-31")
                    .category(" Work ")
                    .category("work")
                    .category("Home"),
            )
            .unwrap();

        let task = tasks.get_task(&id).unwrap();
        assert_eq!(task.id(), id);
        assert_eq!(task.title, "Test Task");
        assert_eq!(task.description, "This is a test task");
        assert_eq!(task.priority, 1);
        assert!(!task.completed);
        assert_eq!(task.due_date.unwrap().format("%Y-%m-%d").to_string(), "2023-12-31");
        assert_eq!(task.categories(), &["work".to_string(), "home".to_string()]);
        assert!(ctx.store.exists());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_task_defaults(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.store);
        let id = tasks.add_task(NewTask::new("Defaults")).unwrap();

        let task = tasks.get_task(&id).unwrap();
        assert_eq!(task.priority, 3);
        assert_eq!(task.description, "");
        assert!(task.due_date.is_none());
        assert!(task.categories().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_task_with_bad_due_date(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.store);
        let id = tasks.add_task(NewTask::new("Sloppy").due_date("tomorrow")).unwrap();
        assert!(tasks.get_task(&id).unwrap().due_date.is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_task_rejects_invalid_arguments(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.store);

        let err = tasks.add_task(NewTask::new("")).unwrap_err();
        assert!(matches!(err, TaskError::EmptyTitle));
        assert!(err.is_invalid_argument());

        for priority in [0, 6] {
            let err = tasks.add_task(NewTask::new("Out of range").priority(priority)).unwrap_err();
            assert!(matches!(err, TaskError::PriorityOutOfRange(p) if p == priority));
            assert!(err.is_invalid_argument());
        }

        assert!(tasks.is_empty());
        assert!(!ctx.store.exists());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_missing_task(ctx: &mut TaskTestContext) {
        let tasks = Tasks::new(&ctx.store);
        assert!(tasks.get_task("nope").is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_mark_task_completed(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.store);
        let id = tasks.add_task(NewTask::new("Test Task").description("Description")).unwrap();

        assert!(tasks.mark_task_completed(&id).unwrap());
        assert!(tasks.get_task(&id).unwrap().completed);

        // Completing again is still a success and changes nothing
        assert!(tasks.mark_task_completed(&id).unwrap());
        assert!(tasks.get_task(&id).unwrap().completed);

        assert!(!tasks.mark_task_completed("missing").unwrap());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_task(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.store);
        let id = tasks.add_task(NewTask::new("Test Task")).unwrap();

        assert!(tasks.delete_task(&id).unwrap());
        assert!(tasks.get_task(&id).is_none());
        assert!(!tasks.delete_task(&id).unwrap());

        let reloaded = Tasks::open(&ctx.store);
        assert!(reloaded.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_category_updates(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.store);
        let id = tasks.add_task(NewTask::new("Tagged").category("work")).unwrap();

        assert!(tasks.add_category_to_task(&id, "Urgent").unwrap());
        assert!(!tasks.add_category_to_task(&id, "urgent").unwrap());
        assert!(!tasks.add_category_to_task(&id, "  ").unwrap());
        assert!(!tasks.add_category_to_task("missing", "urgent").unwrap());
        assert_eq!(tasks.get_task(&id).unwrap().categories(), &["work".to_string(), "urgent".to_string()]);

        assert!(tasks.remove_category_from_task(&id, "WORK").unwrap());
        assert!(!tasks.remove_category_from_task(&id, "work").unwrap());
        assert!(!tasks.remove_category_from_task("missing", "urgent").unwrap());

        let reloaded = Tasks::open(&ctx.store);
        assert_eq!(reloaded.get_task(&id).unwrap().categories(), &["urgent".to_string()]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_mutations_are_persisted(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.store);
        let first = tasks.add_task(NewTask::new("First").priority(2)).unwrap();
        let second = tasks.add_task(NewTask::new("Second").due_date("2030-05-06").category("home")).unwrap();
        tasks.mark_task_completed(&first).unwrap();

        let reloaded = Tasks::open(&ctx.store);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get_task(&first), tasks.get_task(&first));
        assert_eq!(reloaded.get_task(&second), tasks.get_task(&second));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_save_failure_is_reported(ctx: &mut TaskTestContext) {
        // A directory cannot be opened as the store file
        std::fs::create_dir(&ctx.store).unwrap();
        let mut tasks = Tasks::new(&ctx.store);

        let err = tasks.add_task(NewTask::new("Lost")).unwrap_err();
        assert!(matches!(err, TaskError::StoreUnwritable { .. }));
        assert!(!err.is_invalid_argument());
    }
}
