#[cfg(test)]
mod tests {
    use tasker::libs::messages::Message;

    #[test]
    fn test_task_messages() {
        assert_eq!(Message::TaskCreated("1a2b3c4d".to_string()).to_string(), "Task added successfully with ID: 1a2b3c4d");
        assert_eq!(Message::TaskNotFoundWithId("zz".to_string()).to_string(), "Task with ID 'zz' not found!");
        assert_eq!(Message::TasksByPriorityHeader(2).to_string(), "=== Priority 2 Tasks ===");
        assert_eq!(Message::NoSearchResults("apple".to_string()).to_string(), "No tasks found matching 'apple'");
    }

    #[test]
    fn test_store_messages() {
        let msg = Message::StoreCorrupt("expected value at line 1 column 1".to_string()).to_string();
        assert!(msg.starts_with("Error loading tasks: expected value"));
        assert!(msg.ends_with("Starting with an empty task list."));
    }

    #[test]
    fn test_error_macro_prefix() {
        let err = tasker::msg_error_anyhow!(Message::ConfigParseError);
        assert_eq!(err.to_string(), "❌ Failed to parse configuration");
    }
}
