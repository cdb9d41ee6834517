//! Export subcommand implementation.

use std::path::PathBuf;

use crate::cli::error::CliResult;
use crate::db::Database;
use crate::export::{self, DEFAULT_EXPORT_PATH};

/// Export all tasks to CSV; an empty task list is a normal outcome, not
/// a failure.
pub fn run<D: Database>(db: &D, output: Option<PathBuf>) -> CliResult<String> {
    let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH));
    match export::export_csv(db, &path)? {
        Some(written) => Ok(format!("Exported to {}", written.display())),
        None => Ok("No tasks to export".to_string()),
    }
}
