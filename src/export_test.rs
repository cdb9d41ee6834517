//! Tests for CSV export.

use crate::db::{
    Database, NewTask, SqliteDatabase, TaskQuery, TaskRepository, TaskStatus,
};
use crate::export::export_csv;

fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory().expect("Failed to create in-memory database");
    db.migrate().expect("Migration should succeed");
    db
}

#[test]
fn export_writes_header_and_rows_in_id_order() {
    let db = setup_db();
    let tasks = db.tasks();

    tasks
        .create(&NewTask {
            title: "Buy milk".to_string(),
            description: String::new(),
            due_date: "2024-01-01".to_string(),
            priority: 2,
        })
        .unwrap();
    tasks
        .create(&NewTask {
            title: "Pay rent".to_string(),
            description: String::new(),
            due_date: String::new(),
            priority: 1,
        })
        .unwrap();

    // Second task ends up done, as a full-row update
    let mut rent = tasks.get(2).unwrap().unwrap();
    rent.status = TaskStatus::Done;
    tasks.update(&rent).unwrap();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("tasks_export.csv");

    let written = export_csv(&db, &path).expect("Export should succeed");
    assert_eq!(written, Some(path.clone()));

    let contents = std::fs::read_to_string(&path).expect("Export file should be readable");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "id,title,description,created_at,due_date,priority,status"
    );
    assert!(lines[1].starts_with("1,Buy milk,,"));
    assert!(lines[1].ends_with(",2024-01-01,2,open"));
    assert!(lines[2].starts_with("2,Pay rent,,"));
    assert!(lines[2].ends_with(",,1,done"));
}

#[test]
fn export_with_no_tasks_signals_empty_and_writes_nothing() {
    let db = setup_db();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("tasks_export.csv");

    let written = export_csv(&db, &path).expect("Export should succeed");
    assert_eq!(written, None);
    assert!(!path.exists(), "empty export must not create a file");
}

#[test]
fn export_quotes_fields_containing_delimiters() {
    let db = setup_db();
    let tasks = db.tasks();

    tasks
        .create(&NewTask {
            title: "Say \"hi\", later".to_string(),
            description: "line one\nline two".to_string(),
            ..NewTask::default()
        })
        .unwrap();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("quoted.csv");

    export_csv(&db, &path).expect("Export should succeed");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"Say \"\"hi\"\", later\""));
    assert!(contents.contains("\"line one\nline two\""));
}

#[test]
fn export_failure_on_unwritable_destination() {
    let db = setup_db();
    db.tasks()
        .create(&NewTask {
            title: "Unwritable".to_string(),
            ..NewTask::default()
        })
        .unwrap();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    // A directory component that does not exist makes the write fail
    let path = dir.path().join("missing").join("tasks_export.csv");

    let result = export_csv(&db, &path);
    assert!(matches!(
        result,
        Err(crate::export::ExportError::Io(_))
    ));
}

#[test]
fn export_rows_follow_id_order() {
    // Export always reads the full list ordered by id, regardless of how
    // tasks were created.
    let db = setup_db();
    let tasks = db.tasks();

    for title in ["Zulu", "Alpha", "Mike"] {
        tasks
            .create(&NewTask {
                title: title.to_string(),
                ..NewTask::default()
            })
            .unwrap();
    }

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("ordered.csv");
    export_csv(&db, &path).expect("Export should succeed");

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert!(lines[1].starts_with("1,Zulu,"));
    assert!(lines[2].starts_with("2,Alpha,"));
    assert!(lines[3].starts_with("3,Mike,"));

    // Sanity: the repository still has all three
    assert_eq!(db.tasks().list(&TaskQuery::default()).unwrap().len(), 3);
}
