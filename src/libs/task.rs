use crate::libs::error::{Result, WorklogError};
use crate::libs::messages::Message;
use std::collections::BTreeMap;

/// User-defined short names for fully-qualified issue identifiers.
///
/// Keys are matched exactly, including case.
pub type TaskAliases = BTreeMap<String, String>;

/// Turns a task token into a Jira issue identifier.
///
/// An alias wins over everything else. A bare number (sign and leading zeros
/// allowed) is prefixed with `default_project`, keeping the token text as
/// typed. Anything else is assumed to already be a key like `PROJ-123`.
pub fn resolve_task(token: &str, default_project: &str, aliases: &TaskAliases) -> Result<String> {
    if let Some(issue_id) = aliases.get(token) {
        return Ok(issue_id.clone());
    }

    if token.is_empty() {
        return Err(WorklogError::InvalidTask(Message::EmptyTask));
    }

    if token.parse::<i64>().is_ok() {
        if default_project.is_empty() {
            return Err(WorklogError::InvalidTask(Message::DefaultProjectRequired(token.to_string())));
        }
        return Ok(format!("{}-{}", default_project, token));
    }

    Ok(token.to_string())
}
