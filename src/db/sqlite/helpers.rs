//! Shared helper functions for the SQLite repository.

use rusqlite::Connection;
use std::sync::Mutex;

use crate::db::{DbError, DbResult};

/// Validate and map a sort field to the actual column name.
/// Returns None for fields outside the allow-list (falls back to default).
pub fn validate_sort_field(field: &str, allowed: &[&str]) -> Option<&'static str> {
    for &allowed_field in allowed {
        if field == allowed_field {
            // Return static str to avoid lifetime issues
            return match field {
                "id" => Some("id"),
                "title" => Some("title"),
                "due_date" => Some("due_date"),
                "priority" => Some("priority"),
                "created_at" => Some("created_at"),
                "status" => Some("status"),
                _ => None,
            };
        }
    }
    None
}

/// Build an ORDER BY clause from an optional sort key.
///
/// Only allow-listed static column names ever reach the SQL text; an
/// unknown key is ignored and the default field is used instead.
/// Ascending order only, no secondary key.
pub fn build_order_clause(
    order_by: Option<&str>,
    allowed_fields: &[&str],
    default_field: &str,
) -> String {
    let sort_field = order_by
        .and_then(|f| validate_sort_field(f, allowed_fields))
        .unwrap_or(default_field);

    format!("ORDER BY {} ASC", sort_field)
}

/// Helper to execute with the connection lock held.
pub fn with_conn<F, T>(conn: &Mutex<Connection>, f: F) -> DbResult<T>
where
    F: FnOnce(&Connection) -> rusqlite::Result<T>,
{
    let conn = conn.lock().map_err(|e| DbError::Database {
        message: format!("Failed to acquire database lock: {}", e),
    })?;
    f(&conn).map_err(|e| DbError::Database {
        message: e.to_string(),
    })
}
