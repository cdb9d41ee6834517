//! SQLite database connection and schema management.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;

use super::task::SqliteTaskRepository;
use crate::db::{Database, DbError, DbResult};

/// The task table. `migrate` runs this on every start; CREATE TABLE IF
/// NOT EXISTS makes it idempotent and it never touches existing rows.
const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL,
    due_date TEXT NOT NULL DEFAULT '',
    priority INTEGER NOT NULL DEFAULT 3,
    status TEXT NOT NULL DEFAULT 'open'
)";

/// SQLite database implementation.
///
/// Provides access to repositories via associated types, avoiding dynamic
/// dispatch.
pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    /// Open a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::Connection {
            message: e.to_string(),
        })?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory database (useful for testing).
    pub fn in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| DbError::Connection {
            message: e.to_string(),
        })?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a function with access to the underlying connection.
    ///
    /// This is useful for testing and advanced operations that need
    /// direct database access.
    pub fn with_connection<F, T>(&self, f: F) -> DbResult<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self.conn.lock().map_err(|e| DbError::Database {
            message: format!("Failed to acquire database lock: {}", e),
        })?;
        f(&conn).map_err(|e| DbError::Database {
            message: e.to_string(),
        })
    }
}

impl Database for SqliteDatabase {
    type Tasks<'a> = SqliteTaskRepository<'a>;

    fn migrate(&self) -> DbResult<()> {
        let conn = self.conn.lock().map_err(|e| DbError::Database {
            message: format!("Failed to acquire database lock: {}", e),
        })?;

        conn.execute(SCHEMA_TASKS, [])
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })?;

        tracing::debug!("task schema ready");
        Ok(())
    }

    fn tasks(&self) -> Self::Tasks<'_> {
        SqliteTaskRepository { conn: &self.conn }
    }
}
