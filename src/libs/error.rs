//! Error taxonomy for worklog entries.
//!
//! Resolution failures are reported before anything is sent; a submission
//! failure means Jira was contacted (or could not be) and nothing was logged.
//! None of them are retried, the user re-runs the command with fixed input.

use crate::libs::messages::Message;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorklogError>;

#[derive(Debug, Error)]
pub enum WorklogError {
    /// The duration token does not match the duration grammar.
    #[error("{0}")]
    InvalidDuration(Message),

    /// The task token cannot be turned into an issue identifier.
    #[error("{0}")]
    InvalidTask(Message),

    /// The day token matches none of the accepted forms.
    #[error("{0}")]
    InvalidDay(Message),

    /// Jira rejected the entry or could not be reached.
    #[error("{0}")]
    Submission(Message),
}
