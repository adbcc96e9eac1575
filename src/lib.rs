//! # tlog - shorthand Jira worklogs
//!
//! Turns loose command-line tokens into a Jira worklog:
//!
//! ```text
//! tlog 1h30m 42 yesterday "code review"
//! tlog 45m standup
//! tlog 2h PROJ-7 friday
//! tlog 30m 42 2024.03.14
//! ```
//!
//! ## Layout
//!
//! - [`libs`]: pure resolution of durations, tasks and days into a
//!   [`TimeLogEntry`](libs::entry::TimeLogEntry), plus configuration,
//!   secret storage and user-facing messages
//! - [`api`]: submission of entries to Jira
//! - [`commands`]: the command-line interface
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tlog::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
