//! CLI error types.
//!
//! The CLI is the only layer that renders failures to the user; the
//! repository and export errors pass through transparently so their
//! diagnostics survive.

use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;
use crate::export::ExportError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("{message}")]
    #[diagnostic(code(taskdesk::cli::validation), help("{help}"))]
    Validation { message: String, help: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Export(#[from] ExportError),

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(taskdesk::cli::render))]
    Render(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    #[diagnostic(code(taskdesk::cli::io))]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
