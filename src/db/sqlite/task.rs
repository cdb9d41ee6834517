//! SQLite TaskRepository implementation.

use std::str::FromStr;
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension, Row, params};

use super::helpers::{build_order_clause, with_conn};
use crate::db::utils::current_timestamp;
use crate::db::{DbResult, NewTask, Task, TaskQuery, TaskRepository, TaskStatus};

/// Sort keys accepted by `list`; anything else falls back to id order.
const SORT_FIELDS: &[&str] = &["id", "title", "due_date", "priority", "created_at", "status"];

const SELECT_COLUMNS: &str =
    "SELECT id, title, description, created_at, due_date, priority, status FROM tasks";

/// rusqlite-backed task repository.
pub struct SqliteTaskRepository<'a> {
    pub(crate) conn: &'a Mutex<Connection>,
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create(&self, new: &NewTask) -> DbResult<()> {
        // Timestamp and status are assigned here, never taken from input
        let created_at = current_timestamp();

        with_conn(self.conn, |conn| {
            conn.execute(
                "INSERT INTO tasks (title, description, created_at, due_date, priority, status)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    new.title,
                    new.description,
                    created_at,
                    new.due_date,
                    new.priority,
                    TaskStatus::Open.to_string(),
                ],
            )?;
            Ok(())
        })?;

        tracing::debug!(title = %new.title, "task created");
        Ok(())
    }

    fn get(&self, id: i64) -> DbResult<Option<Task>> {
        with_conn(self.conn, |conn| {
            conn.query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                row_to_task,
            )
            .optional()
        })
    }

    fn update(&self, task: &Task) -> DbResult<()> {
        let affected = with_conn(self.conn, |conn| {
            conn.execute(
                "UPDATE tasks
                 SET title = ?1, description = ?2, due_date = ?3, priority = ?4, status = ?5
                 WHERE id = ?6",
                params![
                    task.title,
                    task.description,
                    task.due_date,
                    task.priority,
                    task.status.to_string(),
                    task.id,
                ],
            )
        })?;

        if affected == 0 {
            // Unknown ids are deliberately lenient: not an error, just no row
            tracing::debug!(id = task.id, "update matched no rows");
        }
        Ok(())
    }

    fn delete(&self, id: i64) -> DbResult<()> {
        let affected = with_conn(self.conn, |conn| {
            conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])
        })?;

        if affected == 0 {
            tracing::debug!(id, "delete matched no rows");
        }
        Ok(())
    }

    fn list(&self, query: &TaskQuery) -> DbResult<Vec<Task>> {
        let order_clause = build_order_clause(query.order_by.as_deref(), SORT_FIELDS, "id");
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        with_conn(self.conn, |conn| match search {
            Some(term) => {
                let pattern = format!("%{}%", term);
                let mut stmt = conn.prepare(&format!(
                    "{} WHERE title LIKE ?1 OR description LIKE ?1 {}",
                    SELECT_COLUMNS, order_clause
                ))?;
                let rows = stmt.query_map(params![pattern], row_to_task)?;
                rows.collect()
            }
            None => {
                let mut stmt = conn.prepare(&format!("{} {}", SELECT_COLUMNS, order_clause))?;
                let rows = stmt.query_map([], row_to_task)?;
                rows.collect()
            }
        })
    }
}

/// Convert a database row to a Task model.
fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let status: String = row.get("status")?;
    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        created_at: row.get("created_at")?,
        due_date: row.get("due_date")?,
        priority: row.get("priority")?,
        status: TaskStatus::from_str(&status).unwrap_or_default(),
    })
}
