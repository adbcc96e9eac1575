#[cfg(test)]
mod tests {
    use tlog::libs::error::WorklogError;
    use tlog::libs::task::{resolve_task, TaskAliases};

    fn aliases(pairs: &[(&str, &str)]) -> TaskAliases {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_bare_number_uses_default_project() {
        assert_eq!(resolve_task("42", "PROJ", &TaskAliases::new()).unwrap(), "PROJ-42");
    }

    #[test]
    fn test_bare_number_keeps_token_text() {
        assert_eq!(resolve_task("007", "PROJ", &TaskAliases::new()).unwrap(), "PROJ-007");
        assert_eq!(resolve_task("+5", "PROJ", &TaskAliases::new()).unwrap(), "PROJ-+5");
    }

    #[test]
    fn test_bare_number_without_default_project() {
        let result = resolve_task("42", "", &TaskAliases::new());
        match result {
            Err(WorklogError::InvalidTask(message)) => {
                assert!(message.to_string().contains("default project"));
            }
            other => panic!("expected InvalidTask, got {:?}", other),
        }
    }

    #[test]
    fn test_alias_wins() {
        let aliases = aliases(&[("x", "PROJ-9")]);
        assert_eq!(resolve_task("x", "PROJ", &aliases).unwrap(), "PROJ-9");
    }

    #[test]
    fn test_numeric_alias_wins_over_default_project() {
        let aliases = aliases(&[("1", "OPS-100")]);
        assert_eq!(resolve_task("1", "PROJ", &aliases).unwrap(), "OPS-100");
        assert_eq!(resolve_task("1", "", &aliases).unwrap(), "OPS-100");
    }

    #[test]
    fn test_alias_lookup_is_case_sensitive() {
        let aliases = aliases(&[("standup", "OPS-1")]);
        assert_eq!(resolve_task("Standup", "OPS", &aliases).unwrap(), "Standup");
    }

    #[test]
    fn test_qualified_key_passes_through() {
        assert_eq!(resolve_task("PROJ-123", "", &TaskAliases::new()).unwrap(), "PROJ-123");
        assert_eq!(resolve_task("T1", "", &TaskAliases::new()).unwrap(), "T1");
    }

    #[test]
    fn test_number_too_large_passes_through() {
        let token = "99999999999999999999";
        assert_eq!(resolve_task(token, "", &TaskAliases::new()).unwrap(), token);
    }

    #[test]
    fn test_empty_token() {
        assert!(matches!(
            resolve_task("", "PROJ", &TaskAliases::new()),
            Err(WorklogError::InvalidTask(_))
        ));
    }
}
