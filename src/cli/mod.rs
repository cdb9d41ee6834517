//! Command-line presentation layer.
//!
//! Thin shell over the `db` and `export` modules: argument parsing,
//! caller-side validation, the delete confirmation prompt, and rendering
//! of results and errors. All persistence goes through the repository.

mod commands;
pub mod error;
mod utils;
pub mod validate;


use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::error::CliResult;
use crate::db::{Database, SqliteDatabase};
use crate::paths::get_db_path;

#[derive(Parser)]
#[command(name = "taskdesk")]
#[command(author, version, about = "Single-user desktop task manager", long_about = None)]
pub struct Cli {
    /// Database file path (defaults to XDG data directory: ~/.local/share/taskdesk/tasks.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Longer description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        due: String,
        /// Priority (1-5)
        #[arg(short, long, default_value_t = crate::db::DEFAULT_PRIORITY)]
        priority: i64,
    },
    /// Update an existing task (omitted fields keep their current value)
    Update {
        /// Task ID
        id: i64,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New due date (YYYY-MM-DD, empty string to unset)
        #[arg(long)]
        due: Option<String>,
        /// New priority (1-5)
        #[arg(long)]
        priority: Option<i64>,
        /// New status (open, in_progress, done)
        #[arg(long)]
        status: Option<String>,
    },
    /// Mark a task as done
    Done {
        /// Task ID
        id: i64,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List tasks
    List {
        /// Only tasks whose title or description contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Sort key (id, title, due_date, priority, created_at, status)
        #[arg(long)]
        order_by: Option<String>,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Export all tasks to a CSV file
    Export {
        /// Output path (default: tasks_export.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Ask for a yes/no confirmation on stdin. Defaults to no.
fn confirm(prompt: &str) -> CliResult<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

pub fn run() -> miette::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let db_path = cli.db.clone().unwrap_or_else(get_db_path);

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(error::CliError::Io)?;
    }

    let db = SqliteDatabase::open(&db_path)?;
    db.migrate()?;

    let output = match cli.command {
        Commands::Add {
            title,
            description,
            due,
            priority,
        } => commands::task::add(
            &db,
            commands::task::AddArgs {
                title,
                description,
                due,
                priority,
            },
        )?,
        Commands::Update {
            id,
            title,
            description,
            due,
            priority,
            status,
        } => commands::task::update(
            &db,
            commands::task::UpdateArgs {
                id,
                title,
                description,
                due,
                priority,
                status,
            },
        )?,
        Commands::Done { id } => commands::task::done(&db, id)?,
        Commands::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete task {}?", id))? {
                println!("Aborted");
                return Ok(());
            }
            commands::task::delete(&db, id)?
        }
        Commands::List {
            search,
            order_by,
            format,
        } => commands::task::list(&db, search.as_deref(), order_by.as_deref(), &format)?,
        Commands::Export { output } => commands::export::run(&db, output)?,
    };

    println!("{}", output);
    Ok(())
}
