//! Caller-side validation, applied before the repository is invoked.
//!
//! The repository deliberately does not re-validate: empty titles,
//! malformed due dates, and out-of-range priorities are caught here.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::cli::error::{CliError, CliResult};
use crate::db::TaskStatus;

/// Title must be non-empty after trimming.
pub fn validate_title(title: &str) -> CliResult<()> {
    if title.trim().is_empty() {
        return Err(CliError::Validation {
            message: "Title is required".to_string(),
            help: "Provide a non-empty task title.".to_string(),
        });
    }
    Ok(())
}

/// Due date is either empty ("unset") or a valid `YYYY-MM-DD` calendar date.
pub fn validate_due_date(due: &str) -> CliResult<()> {
    if due.is_empty() {
        return Ok(());
    }
    NaiveDate::parse_from_str(due, "%Y-%m-%d").map_err(|_| CliError::Validation {
        message: format!("Invalid due date: {}", due),
        help: "Use YYYY-MM-DD, e.g. 2024-01-31.".to_string(),
    })?;
    Ok(())
}

/// Priority must be in 1..=5.
pub fn validate_priority(priority: i64) -> CliResult<()> {
    if !(1..=5).contains(&priority) {
        return Err(CliError::Validation {
            message: format!("Priority out of range: {}", priority),
            help: "Priority must be between 1 and 5.".to_string(),
        });
    }
    Ok(())
}

/// Parse a status argument into the persisted enum.
pub fn parse_status(status: &str) -> CliResult<TaskStatus> {
    TaskStatus::from_str(status).map_err(|_| CliError::Validation {
        message: format!("Unknown status: {}", status),
        help: "Valid statuses: open, in_progress, done.".to_string(),
    })
}
