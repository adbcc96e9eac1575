//! The default action: resolve the shorthand arguments and log the time.

use crate::api::{jira::Jira, WorklogSink};
use crate::libs::config::Config;
use crate::libs::entry::{assemble, RawInput, TimeLogEntry};
use crate::libs::formatter::{format_day, format_elapsed};
use crate::libs::messages::Message;
use crate::{msg_info, msg_print, msg_success, msg_warning};
use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use clap::Args;

#[derive(Debug, Args)]
pub struct TimeArgs {
    /// Time spent, e.g. 1h30m, 45m or 1.5h
    #[arg(allow_hyphen_values = true)]
    pub duration: Option<String>,

    /// Issue key (PROJ-123), bare issue number or alias
    pub task: Option<String>,

    /// today, yesterday, a weekday, a day of the month, mm.dd or yyyy.mm.dd
    pub day: Option<String>,

    /// Worklog comment
    pub comment: Option<String>,

    /// Print the resolved worklog without sending it to Jira
    #[arg(long)]
    pub dry_run: bool,
}

impl TimeArgs {
    /// `None` when the two mandatory tokens are not both present.
    pub fn raw_input(&self) -> Option<RawInput> {
        Some(RawInput {
            duration: self.duration.clone()?,
            task: self.task.clone()?,
            day: self.day.clone().unwrap_or_default(),
            comment: self.comment.clone().unwrap_or_default(),
        })
    }
}

pub async fn cmd(args: TimeArgs) -> Result<()> {
    let Some(raw) = args.raw_input() else {
        msg_warning!(Message::Usage);
        return Ok(());
    };

    let config = Config::load_or_init()?;
    let entry = assemble(&raw, &config.task_aliases, &config.default_project, Utc::now())?;

    if entry.elapsed < Duration::zero() {
        msg_warning!(Message::NegativeDuration(format_elapsed(&entry.elapsed)));
    }

    if args.dry_run {
        msg_print!(preview(&entry));
        msg_info!(Message::DryRunNothingSent);
        return Ok(());
    }

    let jira_config = config.jira.as_ref().ok_or_else(|| anyhow!(Message::ConfigJiraMissing))?;

    msg_info!(Message::LoggingTime);
    let receipt = Jira::new(jira_config).submit(&entry).await?;

    msg_success!(Message::WorklogCreated {
        author: receipt.author.clone(),
        issue_id: receipt.issue_id.clone(),
        minutes: receipt.minutes(),
        url: receipt.url.clone(),
    });
    Ok(())
}

pub fn preview(entry: &TimeLogEntry) -> Message {
    Message::EntryPreview {
        issue_id: entry.issue_id.clone(),
        elapsed: format_elapsed(&entry.elapsed),
        day: format_day(&entry.day),
        comment: entry.comment.clone(),
    }
}
