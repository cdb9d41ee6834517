//! taskdesk: a single-user desktop task manager backed by SQLite.
//!
//! The crate splits into a persistence core (`db`, `export`) and a thin
//! CLI presentation shell (`cli`). All reads and writes of task state go
//! through the repository traits in `db`; the shell is responsible for
//! caller-side validation and for rendering results and errors.

pub mod cli;
pub mod db;
pub mod export;
pub mod paths;

#[cfg(test)]
mod export_test;
