//! Storage backends implementing [`crate::repository::TaskRepository`].

use std::fs;
use std::path::PathBuf;

pub mod json;
pub mod sqlite;

pub use json::JsonTaskRepository;
pub use sqlite::SqliteTaskRepository;

/// File name of the JSON store inside the data directory.
pub const TASKS_FILE: &str = "tasks.json";
/// File name of the SQLite store inside the data directory.
pub const TASKS_DB_FILE: &str = "tasks.db";

/// Returns the path to the backing store file.
///
/// The path is determined in the following order:
/// 1. `TASKPAD_DB` environment variable.
/// 2. `~/.local/share/taskpad/<file_name>` (on Linux).
/// 3. `./<file_name>` (fallback).
pub fn store_path(file_name: &str) -> PathBuf {
    std::env::var("TASKPAD_DB").map(PathBuf::from).unwrap_or_else(|_| {
        let mut p = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("taskpad");
        if !p.exists() {
            let _ = fs::create_dir_all(&p);
        }
        p.push(file_name);
        p
    })
}
