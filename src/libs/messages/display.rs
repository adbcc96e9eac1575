//! Display implementation for tlog application messages.
//!
//! Every piece of user-facing text lives in this one `match`, so wording
//! stays consistent between the resolver errors, the setup wizard and the
//! submission report.
//!
//! ```rust
//! use tlog::libs::messages::Message;
//!
//! let message = Message::InvalidDay("someday".to_string());
//! assert!(message.to_string().contains("day of the week"));
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === USAGE ===
            Message::Usage => "Usage: tlog <time> <task> [date|day] [comment]".to_string(),

            // === DURATION MESSAGES ===
            Message::InvalidDuration(token, reason) => format!("invalid duration \"{}\": {}", token, reason),
            Message::NegativeDuration(elapsed) => format!("Logging a negative duration ({}), Jira may reject it", elapsed),

            // === TASK MESSAGES ===
            Message::EmptyTask => "task must not be empty".to_string(),
            Message::DefaultProjectRequired(token) => {
                format!("configure a default project to use bare issue numbers (got \"{}\")", token)
            }

            // === DAY MESSAGES ===
            Message::InvalidDay(token) => {
                format!("invalid day \"{}\": [yy.]mm.dd, day of the week, or day of the month expected", token)
            }

            // === ENTRY MESSAGES ===
            Message::EntryPreview {
                issue_id,
                elapsed,
                day,
                comment,
            } => {
                let comment = if comment.is_empty() { "-" } else { comment.as_str() };
                format!("Issue:   {}\nTime:    {}\nDay:     {}\nComment: {}", issue_id, elapsed, day, comment)
            }
            Message::DryRunNothingSent => "Dry run, nothing was sent to Jira".to_string(),

            // === WORKLOG MESSAGES ===
            Message::LoggingTime => "Logging time... (Jira might be slow🐌)".to_string(),
            Message::WorklogCreated {
                author,
                issue_id,
                minutes,
                url,
            } => format!(
                "Created worklog as {} on issue {} for {} minutes: {}",
                author, issue_id, minutes, url
            ),
            Message::WorklogRejected(status, details) if details.is_empty() => {
                format!("Jira rejected the worklog (HTTP {})", status)
            }
            Message::WorklogRejected(status, details) => format!("Jira rejected the worklog (HTTP {}): {}", status, details),
            Message::WorklogRequestFailed(error) => format!("Failed to reach Jira: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigSavedAt(path) => format!("Config saved at: {}", path),
            Message::ConfigParseError(path) => format!("Cannot decode config file {}", path),
            Message::ConfigJiraMissing => "Jira is not configured, run `tlog --init`".to_string(),
            Message::SetupGreeting => "Hello there 👋\nLet's perform some basic setup.".to_string(),
            Message::SetupSummary {
                login,
                masked_password,
                api_url,
                default_project,
            } => {
                let default_project = if default_project.is_empty() { "-" } else { default_project.as_str() };
                format!(
                    "Got it👌\nYour login is: {}\nPassword is: {}\nJira url is: {}\nDefault project is: {}",
                    login, masked_password, api_url, default_project
                )
            }

            // === AUTHENTICATION MESSAGES ===
            Message::JiraAuthenticateFailed => "Jira authentication failed, you will be asked for the password again next time".to_string(),

            // === VALIDATION MESSAGES ===
            Message::ValueRequired => "value is required".to_string(),
            Message::UrlInvalid(error) => format!("invalid url: {}", error),
            Message::UrlHostMissing => "host is missing".to_string(),

            // === PROMPTS ===
            Message::PromptJiraLogin => "Enter your Jira username".to_string(),
            Message::PromptJiraPassword => "Now enter your password 🤫".to_string(),
            Message::PromptJiraUrl => "Almost done! Now enter Jira url".to_string(),
            Message::PromptDefaultProject => "Default project for bare issue numbers (optional)".to_string(),
            Message::PromptConfirmSetup => "Correct?".to_string(),
        };

        write!(f, "{}", text)
    }
}
