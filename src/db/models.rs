//! Domain models for the task database.
//!
//! These models are storage-agnostic and represent the entities used
//! throughout the application.

use serde::{Deserialize, Serialize};

/// Default priority assigned when the caller does not specify one.
pub const DEFAULT_PRIORITY: i64 = 3;

/// A single persisted work item.
///
/// `id` and `created_at` are assigned on creation and never change.
/// Timestamps are stored as UTC RFC 3339 text; `due_date` is either a
/// `YYYY-MM-DD` date or the empty string for "unset".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub due_date: String,
    pub priority: i64,
    pub status: TaskStatus,
}

/// Input for creating a task.
///
/// `id`, `created_at`, and `status` are assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: i64,
}

impl Default for NewTask {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            due_date: String::new(),
            priority: DEFAULT_PRIORITY,
        }
    }
}

/// Query for listing tasks - substring search plus a sort key.
///
/// `Default` means "all tasks, primary-key order".
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    /// Only tasks whose title or description contains this substring.
    pub search: Option<String>,
    /// Sort key (validated against an allow-list; unknown keys fall back
    /// to primary-key order).
    pub order_by: Option<String>,
}

/// Status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Open,
    InProgress,
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Open => write!(f, "open"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(TaskStatus::Open),
            "in_progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            _ => Err(format!("Invalid TaskStatus: {}", s)),
        }
    }
}
