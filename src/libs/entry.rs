//! Worklog entry assembly.
//!
//! Combines the duration, task and day resolvers into one [`TimeLogEntry`].
//! Resolution is pure: configuration and the current instant are passed in,
//! nothing is read from the environment and nothing is sent anywhere.
//!
//! ```rust
//! use chrono::{Duration, NaiveDate, TimeZone, Utc};
//! use tlog::libs::entry::{assemble, RawInput};
//! use tlog::libs::task::TaskAliases;
//!
//! let raw = RawInput::new("1h", "42");
//! let now = Utc.with_ymd_and_hms(2024, 3, 14, 10, 0, 0).unwrap();
//! let entry = assemble(&raw, &TaskAliases::new(), "OPS", now).unwrap();
//!
//! assert_eq!(entry.elapsed, Duration::hours(1));
//! assert_eq!(entry.issue_id, "OPS-42");
//! assert_eq!(entry.day, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
//! ```

use crate::libs::day::resolve_day;
use crate::libs::duration::parse_duration;
use crate::libs::error::Result;
use crate::libs::task::{resolve_task, TaskAliases};
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Command-line tokens as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub duration: String,
    pub task: String,
    /// Empty means today.
    pub day: String,
    pub comment: String,
}

impl RawInput {
    pub fn new(duration: &str, task: &str) -> Self {
        Self {
            duration: duration.to_string(),
            task: task.to_string(),
            ..Self::default()
        }
    }

    pub fn day(mut self, day: &str) -> Self {
        self.day = day.to_string();
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        self
    }
}

/// A fully resolved worklog, ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLogEntry {
    pub elapsed: Duration,
    pub issue_id: String,
    pub day: NaiveDate,
    pub comment: String,
}

impl TimeLogEntry {
    /// Elapsed time in whole seconds, fractional seconds truncated toward zero.
    pub fn time_spent_seconds(&self) -> i64 {
        self.elapsed.num_seconds()
    }

    /// Start of the logged day, midnight UTC.
    pub fn started(&self) -> DateTime<Utc> {
        self.day.and_time(chrono::NaiveTime::MIN).and_utc()
    }
}

/// Resolves all tokens of `raw`, stopping at the first failure.
///
/// The duration is checked first, then the task, then the day.
pub fn assemble(raw: &RawInput, aliases: &TaskAliases, default_project: &str, now: DateTime<Utc>) -> Result<TimeLogEntry> {
    let elapsed = parse_duration(&raw.duration)?;
    let issue_id = resolve_task(&raw.task, default_project, aliases)?;
    let day = resolve_day(&raw.day, now)?;

    Ok(TimeLogEntry {
        elapsed,
        issue_id,
        day,
        comment: raw.comment.clone(),
    })
}
