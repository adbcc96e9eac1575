use super::{WorklogReceipt, WorklogSink};
use crate::libs::entry::TimeLogEntry;
use crate::libs::error::WorklogError;
use crate::libs::messages::Message;
use crate::libs::secret::Secret;
use crate::msg_debug;
use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const SECRET_FILE: &str = ".jira_secret";
const ISSUE_URL: &str = "rest/api/2/issue";
const STARTED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

#[derive(Clone, Debug)]
struct LoginCredentials {
    username: String,
    password: String,
}

/// Body of a create-worklog request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorklogRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    pub started: String,
    pub time_spent_seconds: i64,
}

impl From<&TimeLogEntry> for WorklogRecord {
    fn from(entry: &TimeLogEntry) -> Self {
        Self {
            comment: entry.comment.clone(),
            started: entry.started().format(STARTED_FORMAT).to_string(),
            time_spent_seconds: entry.time_spent_seconds(),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
    pub name: Option<String>,
    pub display_name: Option<String>,
}

/// Worklog as returned by Jira after creation.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Worklog {
    #[serde(rename = "self")]
    pub self_url: String,
    pub author: Option<JiraUser>,
    #[serde(default)]
    pub time_spent_seconds: i64,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JiraErrorResponse {
    #[serde(default)]
    error_messages: Vec<String>,
    #[serde(default)]
    errors: BTreeMap<String, String>,
}

/// Jira REST client limited to creating worklogs.
#[derive(Debug)]
pub struct Jira {
    client: Client,
    config: JiraConfig,
    secret: Secret,
    credentials: Option<LoginCredentials>,
}

impl WorklogSink for Jira {
    async fn submit(&mut self, entry: &TimeLogEntry) -> Result<WorklogReceipt> {
        let worklog = self.add_worklog(&entry.issue_id, &WorklogRecord::from(entry)).await?;
        let author = worklog
            .author
            .and_then(|author| author.name.or(author.display_name))
            .unwrap_or_else(|| self.config.login.clone());

        Ok(WorklogReceipt {
            author,
            issue_id: entry.issue_id.clone(),
            time_spent_seconds: worklog.time_spent_seconds,
            url: worklog.self_url,
        })
    }
}

impl Jira {
    pub fn new(config: &JiraConfig) -> Self {
        Self::with_secret(config, config.secret())
    }

    pub fn with_secret(config: &JiraConfig, secret: Secret) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            secret,
            credentials: None,
        }
    }

    pub fn set_credentials(&mut self, password: &str) {
        self.credentials = Some(LoginCredentials {
            username: self.config.login.to_string(),
            password: password.to_owned(),
        });
    }

    fn credentials(&mut self) -> Result<LoginCredentials> {
        if self.credentials.is_none() {
            let password = self.secret.get_or_prompt()?;
            self.set_credentials(&password);
        }
        self.credentials.clone().ok_or_else(|| WorklogError::Submission(Message::JiraAuthenticateFailed).into())
    }

    pub fn worklog_url(&self, issue_id: &str) -> String {
        format!("{}/{}/{}/worklog", self.config.api_url.trim_end_matches('/'), ISSUE_URL, issue_id)
    }

    /// Creates a worklog on `issue_id` using basic authentication.
    ///
    /// A 401 drops the stored password so the next run asks for it again.
    pub async fn add_worklog(&mut self, issue_id: &str, record: &WorklogRecord) -> Result<Worklog> {
        let credentials = self.credentials()?;
        let url = self.worklog_url(issue_id);
        msg_debug!(format!("POST {} ({}s)", url, record.time_spent_seconds));

        let res = self
            .client
            .post(&url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .json(record)
            .send()
            .await
            .map_err(|e| WorklogError::Submission(Message::WorklogRequestFailed(e.to_string())))?;

        match res.status() {
            status if status.is_success() => {
                let worklog = res
                    .json::<Worklog>()
                    .await
                    .map_err(|e| WorklogError::Submission(Message::WorklogRequestFailed(e.to_string())))?;
                Ok(worklog)
            }
            StatusCode::UNAUTHORIZED => {
                self.credentials = None;
                self.secret.forget()?;
                Err(WorklogError::Submission(Message::JiraAuthenticateFailed).into())
            }
            status => {
                let body = res.text().await.unwrap_or_default();
                Err(WorklogError::Submission(Message::WorklogRejected(status.as_u16(), error_details(&body))).into())
            }
        }
    }
}

/// Flattens a Jira error body into one line, falling back to the raw text.
fn error_details(body: &str) -> String {
    match serde_json::from_str::<JiraErrorResponse>(body) {
        Ok(response) => {
            let mut details = response.error_messages;
            details.extend(response.errors.into_iter().map(|(field, error)| format!("{}: {}", field, error)));
            details.join("; ")
        }
        Err(_) => body.trim().to_string(),
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct JiraConfig {
    pub login: String,
    pub api_url: String,
}

impl JiraConfig {
    /// Encrypted password file shared by the setup wizard and the client.
    pub fn secret(&self) -> Secret {
        Secret::new(SECRET_FILE, &Message::PromptJiraPassword.to_string())
    }
}
