//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the presentation layer.

use crate::db::{
    DbResult,
    models::{NewTask, Task, TaskQuery},
};

/// Repository for Task operations.
///
/// Each operation is its own unit of work; there are no cross-call
/// transactions. Title validation happens caller-side, before the
/// repository is invoked.
pub trait TaskRepository {
    /// Insert a new task. Assigns `created_at` (UTC, RFC 3339) and sets
    /// the status to open; the id is assigned by the storage engine.
    fn create(&self, new: &NewTask) -> DbResult<()>;

    /// Fetch a task by id. `None` when no row matches.
    fn get(&self, id: i64) -> DbResult<Option<Task>>;

    /// Overwrite all mutable fields of the row matching `task.id`.
    /// An unknown id is a silent no-op.
    fn update(&self, task: &Task) -> DbResult<()>;

    /// Delete the row matching `id`. An unknown id is a silent no-op.
    fn delete(&self, id: i64) -> DbResult<()>;

    /// All tasks, optionally filtered and ordered.
    fn list(&self, query: &TaskQuery) -> DbResult<Vec<Task>>;
}

/// Combined database interface.
///
/// Repositories are exposed via associated types, avoiding dynamic
/// dispatch.
pub trait Database {
    type Tasks<'a>: TaskRepository
    where
        Self: 'a;

    /// Ensure the schema exists. Safe to call on every start; never
    /// alters or drops existing data.
    fn migrate(&self) -> DbResult<()>;

    /// Get the task repository.
    fn tasks(&self) -> Self::Tasks<'_>;
}
