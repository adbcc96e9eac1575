//! Persisted configuration and the first-run setup wizard.
//!
//! The configuration is a small TOML file in the application data directory:
//!
//! ```toml
//! default_project = "OPS"
//!
//! [jira]
//! login = "jdoe"
//! api_url = "https://jira.example.com"
//!
//! [task_aliases]
//! standup = "OPS-1"
//! review = "OPS-7"
//! ```
//!
//! The Jira password is not part of it; the wizard hands it to
//! [`Secret`](crate::libs::secret::Secret), which keeps it encrypted in a
//! separate file. Aliases are edited by hand, the wizard only preserves them.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\tlog\tlog\config.toml`
//! - **macOS**: `~/Library/Application Support/tlog/tlog/config.toml`
//! - **Linux**: `~/.local/share/tlog/tlog/config.toml`

use super::data_storage::DataStorage;
use crate::api::jira::JiraConfig;
use crate::libs::messages::Message;
use crate::libs::task::TaskAliases;
use crate::{msg_debug, msg_print, msg_success};
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Prefix for bare issue numbers, `42` becomes `<default_project>-42`.
    ///
    /// Empty means bare numbers are rejected.
    #[serde(default)]
    pub default_project: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira: Option<JiraConfig>,

    #[serde(default)]
    pub task_aliases: TaskAliases,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration, or the default one if no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = Self::path()?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        let config_str = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_str).with_context(|| Message::ConfigParseError(path.display().to_string()))?;
        msg_debug!(format!("Loaded configuration from {}", path.display()));
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Loads the configuration, running the setup wizard first if there is none.
    pub fn load_or_init() -> Result<Config> {
        let config_file_path = Self::path()?;
        if config_file_path.exists() {
            return Self::read_from(&config_file_path);
        }

        let config = Self::init(&Config::default())?;
        config.save_to(&config_file_path)?;
        msg_success!(Message::ConfigSavedAt(config_file_path.display().to_string()));
        Ok(config)
    }

    /// Interactive setup. Previous answers are offered as defaults and
    /// aliases are carried over untouched.
    ///
    /// The Jira password is stored through the Jira secret as soon as the
    /// summary is confirmed.
    pub fn init(current: &Config) -> Result<Config> {
        let theme = ColorfulTheme::default();
        let mut jira = current.jira.clone().unwrap_or_default();
        let mut default_project = current.default_project.clone();

        msg_print!(Message::SetupGreeting, true);

        let password = loop {
            let mut login = Input::<String>::with_theme(&theme)
                .with_prompt(Message::PromptJiraLogin.to_string())
                .validate_with(|input: &String| validate_required(input));
            if !jira.login.is_empty() {
                login = login.default(jira.login.clone());
            }
            jira.login = login.interact_text()?;

            let password = Password::with_theme(&theme)
                .with_prompt(Message::PromptJiraPassword.to_string())
                .interact()?;

            let mut api_url = Input::<String>::with_theme(&theme)
                .with_prompt(Message::PromptJiraUrl.to_string())
                .validate_with(|input: &String| validate_url(input));
            if !jira.api_url.is_empty() {
                api_url = api_url.default(jira.api_url.clone());
            }
            jira.api_url = api_url.interact_text()?.trim_end_matches('/').to_string();

            default_project = Input::<String>::with_theme(&theme)
                .with_prompt(Message::PromptDefaultProject.to_string())
                .default(default_project.clone())
                .show_default(!default_project.is_empty())
                .allow_empty(true)
                .interact_text()?
                .trim()
                .to_string();

            msg_print!(Message::SetupSummary {
                login: jira.login.clone(),
                masked_password: mask(&password),
                api_url: jira.api_url.clone(),
                default_project: default_project.clone(),
            });

            let confirmed = Confirm::with_theme(&theme)
                .with_prompt(Message::PromptConfirmSetup.to_string())
                .default(true)
                .interact()?;
            if confirmed {
                break password;
            }
        };

        jira.secret().store(&password)?;

        Ok(Config {
            default_project,
            jira: Some(jira),
            task_aliases: current.task_aliases.clone(),
        })
    }
}

pub fn validate_required(input: &str) -> Result<(), Message> {
    if input.trim().is_empty() {
        return Err(Message::ValueRequired);
    }
    Ok(())
}

/// Accepts absolute URLs that name a host.
pub fn validate_url(input: &str) -> Result<(), Message> {
    let url = Url::parse(input.trim()).map_err(|e| Message::UrlInvalid(e.to_string()))?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(Message::UrlHostMissing),
    }
}

/// One `*` per character.
pub fn mask(password: &str) -> String {
    "*".repeat(password.chars().count())
}
