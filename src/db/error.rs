//! Database error types.
//!
//! Storage-backend agnostic errors. Uses miette for diagnostic output
//! and thiserror for the derive macros.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Connection error: {message}")]
    #[diagnostic(code(taskdesk::db::connection_error))]
    Connection { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(taskdesk::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(taskdesk::db::migration_error))]
    Migration { message: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
