//! Tests for domain models.

use std::str::FromStr;

use crate::db::{DEFAULT_PRIORITY, NewTask, TaskStatus};

#[test]
fn status_display_matches_persisted_strings() {
    assert_eq!(TaskStatus::Open.to_string(), "open");
    assert_eq!(TaskStatus::InProgress.to_string(), "in_progress");
    assert_eq!(TaskStatus::Done.to_string(), "done");
}

#[test]
fn status_round_trips_through_from_str() {
    for status in [TaskStatus::Open, TaskStatus::InProgress, TaskStatus::Done] {
        let parsed = TaskStatus::from_str(&status.to_string()).unwrap();
        assert_eq!(parsed, status);
    }
}

#[test]
fn status_rejects_unknown_strings() {
    assert!(TaskStatus::from_str("cancelled").is_err());
    assert!(TaskStatus::from_str("").is_err());
    assert!(TaskStatus::from_str("OPEN").is_err());
}

#[test]
fn status_defaults_to_open() {
    assert_eq!(TaskStatus::default(), TaskStatus::Open);
}

#[test]
fn new_task_defaults_to_priority_three() {
    let new = NewTask::default();
    assert_eq!(new.priority, DEFAULT_PRIORITY);
    assert!(new.title.is_empty());
    assert!(new.due_date.is_empty());
}

#[test]
fn status_serializes_as_snake_case() {
    let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
    assert_eq!(json, "\"in_progress\"");
}
