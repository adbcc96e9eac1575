#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tlog::api::JiraConfig;
    use tlog::libs::config::{mask, validate_required, validate_url, Config};
    use tlog::libs::messages::Message;
    use tlog::libs::task::TaskAliases;

    /// Each test gets its own directory; the config path is passed explicitly
    /// so nothing touches the real data directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        config_path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config_path = temp_dir.path().join("nested").join("config.toml");
            ConfigTestContext {
                _temp_dir: temp_dir,
                config_path,
            }
        }
    }

    fn sample_config() -> Config {
        let mut task_aliases = TaskAliases::new();
        task_aliases.insert("standup".to_string(), "OPS-1".to_string());
        task_aliases.insert("review".to_string(), "OPS-7".to_string());

        Config {
            default_project: "OPS".to_string(),
            jira: Some(JiraConfig {
                login: "jdoe".to_string(),
                api_url: "https://jira.example.com".to_string(),
            }),
            task_aliases,
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.default_project.is_empty());
        assert!(config.jira.is_none());
        assert!(config.task_aliases.is_empty());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = sample_config();
        config.save_to(&ctx.config_path).unwrap();

        let read_config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_saved_file_has_no_password(ctx: &mut ConfigTestContext) {
        sample_config().save_to(&ctx.config_path).unwrap();
        let content = fs::read_to_string(&ctx.config_path).unwrap();

        assert!(content.contains("default_project = \"OPS\""));
        assert!(content.contains("[task_aliases]"));
        assert!(!content.to_lowercase().contains("password"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_hand_written_config(ctx: &mut ConfigTestContext) {
        fs::create_dir_all(ctx.config_path.parent().unwrap()).unwrap();
        fs::write(
            &ctx.config_path,
            r#"
default_project = "WEB"

[jira]
login = "jdoe"
api_url = "https://jira.example.com"

[task_aliases]
"Mixed Case" = "WEB-3"
lunch = "HR-12"
"#,
        )
        .unwrap();

        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config.default_project, "WEB");
        assert_eq!(config.jira.unwrap().login, "jdoe");
        assert_eq!(config.task_aliases.get("lunch").map(String::as_str), Some("HR-12"));
        assert_eq!(config.task_aliases.get("Mixed Case").map(String::as_str), Some("WEB-3"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_sections_default_to_empty(ctx: &mut ConfigTestContext) {
        fs::create_dir_all(ctx.config_path.parent().unwrap()).unwrap();
        fs::write(&ctx.config_path, "[jira]\nlogin = \"jdoe\"\napi_url = \"https://jira.example.com\"\n").unwrap();

        let config = Config::read_from(&ctx.config_path).unwrap();
        assert!(config.default_project.is_empty());
        assert!(config.task_aliases.is_empty());
        assert!(config.jira.is_some());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unparseable_config_names_the_file(ctx: &mut ConfigTestContext) {
        fs::create_dir_all(ctx.config_path.parent().unwrap()).unwrap();
        fs::write(&ctx.config_path, "default_project = [unterminated").unwrap();

        let error = Config::read_from(&ctx.config_path).unwrap_err();
        assert!(error.to_string().contains("config.toml"));
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("jdoe").is_ok());
        assert!(matches!(validate_required(""), Err(Message::ValueRequired)));
        assert!(matches!(validate_required("   "), Err(Message::ValueRequired)));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://jira.example.com").is_ok());
        assert!(validate_url("http://localhost:8080/jira").is_ok());
        assert!(matches!(validate_url("jira.example.com"), Err(Message::UrlInvalid(_))));
        assert!(matches!(validate_url("mailto:someone@example.com"), Err(Message::UrlHostMissing)));
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("hunter2"), "*******");
        assert_eq!(mask("пароль"), "******");
        assert_eq!(mask(""), "");
    }
}
