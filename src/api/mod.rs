//! Submission of resolved worklog entries to an issue tracker.
//!
//! The resolvers in [`libs`](crate::libs) never talk to the network; once an
//! entry is assembled it is handed to a [`WorklogSink`]. Jira is the only
//! implementation.
//!
//! ```rust,no_run
//! use tlog::api::{jira::Jira, JiraConfig, WorklogSink};
//! # async fn run(config: JiraConfig, entry: tlog::libs::entry::TimeLogEntry) -> anyhow::Result<()> {
//! let mut jira = Jira::new(&config);
//! let receipt = jira.submit(&entry).await?;
//! println!("{}", receipt.url);
//! # Ok(())
//! # }
//! ```

use crate::libs::entry::TimeLogEntry;
use anyhow::Result;

pub mod jira;

pub use jira::JiraConfig;

/// What the tracker reports back about a created worklog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorklogReceipt {
    pub author: String,
    pub issue_id: String,
    pub time_spent_seconds: i64,
    /// Resource URL of the created worklog.
    pub url: String,
}

impl WorklogReceipt {
    /// Logged time in whole minutes, rounded down.
    pub fn minutes(&self) -> i64 {
        self.time_spent_seconds / 60
    }
}

/// Consumes one entry and creates the matching worklog.
///
/// Implementations make a single attempt; failures surface as
/// [`WorklogError::Submission`](crate::libs::error::WorklogError::Submission)
/// where the tracker was involved, and as plain errors for local problems
/// such as an unreadable secret file.
#[allow(async_fn_in_trait)]
pub trait WorklogSink {
    async fn submit(&mut self, entry: &TimeLogEntry) -> Result<WorklogReceipt>;
}
