//! Tests for database error formatting.

use crate::db::DbError;

#[test]
fn connection_error_display() {
    let err = DbError::Connection {
        message: "unable to open database file".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Connection error: unable to open database file"
    );
}

#[test]
fn database_error_display() {
    let err = DbError::Database {
        message: "disk I/O error".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: disk I/O error");
}

#[test]
fn migration_error_display() {
    let err = DbError::Migration {
        message: "table tasks already exists".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Migration error: table tasks already exists"
    );
}
