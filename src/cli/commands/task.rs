//! Task subcommand implementations.
//!
//! Each function validates its input, drives the repository, and returns
//! the text the shell prints. Update and done mirror the original
//! full-row contract: the current row is fetched, overrides are applied,
//! and the whole task is written back.

use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, display_or_dash, truncate_with_ellipsis};
use crate::cli::validate;
use crate::db::{Database, NewTask, Task, TaskQuery, TaskRepository, TaskStatus};

#[derive(Tabled)]
struct TaskDisplay {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Due")]
    due_date: String,
    #[tabled(rename = "Priority")]
    priority: i64,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created_at: String,
}

impl From<&Task> for TaskDisplay {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: truncate_with_ellipsis(&task.title, 50),
            due_date: display_or_dash(&task.due_date),
            priority: task.priority,
            status: task.status.to_string(),
            created_at: task.created_at.clone(),
        }
    }
}

pub struct AddArgs {
    pub title: String,
    pub description: String,
    pub due: String,
    pub priority: i64,
}

pub struct UpdateArgs {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due: Option<String>,
    pub priority: Option<i64>,
    pub status: Option<String>,
}

/// Create a new task.
pub fn add<D: Database>(db: &D, args: AddArgs) -> CliResult<String> {
    let title = args.title.trim();
    let due = args.due.trim();
    validate::validate_title(title)?;
    validate::validate_due_date(due)?;
    validate::validate_priority(args.priority)?;

    db.tasks().create(&NewTask {
        title: title.to_string(),
        description: args.description.trim().to_string(),
        due_date: due.to_string(),
        priority: args.priority,
    })?;

    Ok("Task added".to_string())
}

/// Update a task: fetch the current row, apply the overrides, write the
/// full row back.
pub fn update<D: Database>(db: &D, args: UpdateArgs) -> CliResult<String> {
    let Some(mut task) = db.tasks().get(args.id)? else {
        return Ok(format!("No task with id {}", args.id));
    };

    if let Some(title) = args.title {
        task.title = title.trim().to_string();
    }
    if let Some(description) = args.description {
        task.description = description.trim().to_string();
    }
    if let Some(due) = args.due {
        task.due_date = due.trim().to_string();
    }
    if let Some(priority) = args.priority {
        task.priority = priority;
    }
    if let Some(status) = args.status {
        task.status = validate::parse_status(&status)?;
    }

    validate::validate_title(&task.title)?;
    validate::validate_due_date(&task.due_date)?;
    validate::validate_priority(task.priority)?;

    db.tasks().update(&task)?;
    Ok(format!("Task {} updated", task.id))
}

/// Mark a task as done, keeping every other field.
pub fn done<D: Database>(db: &D, id: i64) -> CliResult<String> {
    let Some(mut task) = db.tasks().get(id)? else {
        return Ok(format!("No task with id {}", id));
    };

    task.status = TaskStatus::Done;
    db.tasks().update(&task)?;
    Ok(format!("Task {} marked done", id))
}

/// Delete a task. The confirmation prompt lives in the shell; an unknown
/// id is a repository-level no-op.
pub fn delete<D: Database>(db: &D, id: i64) -> CliResult<String> {
    db.tasks().delete(id)?;
    Ok(format!("Task {} deleted", id))
}

/// List tasks as a table or JSON.
pub fn list<D: Database>(
    db: &D,
    search: Option<&str>,
    order_by: Option<&str>,
    format: &str,
) -> CliResult<String> {
    let query = TaskQuery {
        search: search.map(str::to_string),
        order_by: order_by.map(str::to_string),
    };
    let tasks = db.tasks().list(&query)?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&tasks)?),
        _ => {
            if tasks.is_empty() {
                return Ok("No tasks".to_string());
            }
            let rows: Vec<TaskDisplay> = tasks.iter().map(TaskDisplay::from).collect();
            let mut table = Table::new(rows);
            apply_table_style(&mut table);
            Ok(table.to_string())
        }
    }
}
