//! CSV export of the task list.

use std::fs;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use crate::db::{Database, DbError, TaskQuery, TaskRepository};

/// Default export destination, relative to the working directory.
pub const DEFAULT_EXPORT_PATH: &str = "tasks_export.csv";

const HEADER: &str = "id,title,description,created_at,due_date,priority,status";

/// Export failures.
#[derive(Error, Diagnostic, Debug)]
pub enum ExportError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),

    #[error("Failed to write export file: {0}")]
    #[diagnostic(code(taskdesk::export::io))]
    Io(#[from] std::io::Error),
}

/// Write all tasks to `path` as UTF-8 CSV, ordered by id.
///
/// Returns `Ok(None)` without touching the filesystem when there are no
/// tasks; otherwise the path the file was written to.
pub fn export_csv<D: Database>(db: &D, path: &Path) -> Result<Option<PathBuf>, ExportError> {
    let query = TaskQuery {
        order_by: Some("id".to_string()),
        ..TaskQuery::default()
    };
    let tasks = db.tasks().list(&query)?;
    if tasks.is_empty() {
        return Ok(None);
    }

    let mut csv = String::with_capacity((tasks.len() + 1) * 64);
    csv.push_str(HEADER);
    csv.push('\n');
    for t in &tasks {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            t.id,
            csv_escape(&t.title),
            csv_escape(&t.description),
            csv_escape(&t.created_at),
            csv_escape(&t.due_date),
            t.priority,
            t.status,
        ));
    }

    fs::write(path, csv)?;
    tracing::info!(path = %path.display(), count = tasks.len(), "exported tasks");
    Ok(Some(path.to_path_buf()))
}

/// Quote a field when it contains the delimiter, a quote, or a newline.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
