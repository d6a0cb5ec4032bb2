//! Relational backend backed by an embedded SQLite database.
//!
//! Filtering and sorting happen server-side in a single query, so every
//! filter+sort combination yields one deterministic row order.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::error::TaskError;
use crate::models::{Priority, Task, TaskFilter, TaskStats};
use crate::repository::TaskRepository;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    done INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    priority INTEGER NOT NULL,
    due_date TEXT
)";

/// The status clause passes every row unless the filter is exactly
/// `active` or `completed`. The ORDER BY is one compound expression: the
/// CASE clauses are no-ops unless their key is selected, and
/// `created_at DESC` is always the final tie-break.
const LIST_SQL: &str = "SELECT id, title, done, created_at, priority, due_date
    FROM tasks
    WHERE (?1 <> 'active' OR done = 0) AND (?1 <> 'completed' OR done = 1)
    ORDER BY
        CASE WHEN ?2 = 'priority' THEN priority END DESC,
        CASE WHEN ?2 = 'due_date' THEN due_date END ASC NULLS LAST,
        created_at DESC";

const GET_SQL: &str =
    "SELECT id, title, done, created_at, priority, due_date FROM tasks WHERE id = ?1";

/// Task repository persisting to a SQLite database file.
pub struct SqliteTaskRepository {
    conn: Connection,
}

impl SqliteTaskRepository {
    /// Opens (creating if needed) the database at `path` and ensures the
    /// schema exists.
    pub fn open(path: &Path) -> Result<Self, TaskError> {
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened sqlite store");
        Self::init(conn)
    }

    /// Opens a private in-memory database. Used by tests.
    pub fn open_in_memory() -> Result<Self, TaskError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, TaskError> {
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteTaskRepository { conn })
    }
}

impl TaskRepository for SqliteTaskRepository {
    fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>, TaskError> {
        debug!(status = filter.status.as_sql(), sort = filter.sort_by.as_sql(), "listing tasks");
        let mut stmt = self.conn.prepare(LIST_SQL)?;
        let tasks = stmt
            .query_map(
                params![filter.status.as_sql(), filter.sort_by.as_sql()],
                task_from_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    fn get(&self, id: &str) -> Result<Task, TaskError> {
        self.conn
            .query_row(GET_SQL, params![id], task_from_row)
            .optional()?
            .ok_or_else(|| TaskError::not_found(id))
    }

    fn create(&self, task: &Task) -> Result<(), TaskError> {
        // A duplicate id trips the primary-key constraint and surfaces as
        // a database error.
        self.conn.execute(
            "INSERT INTO tasks (id, title, done, created_at, priority, due_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                task.id,
                task.title,
                task.done,
                task.created_at.to_rfc3339(),
                task.priority.ordinal(),
                task.due_date.map(|d| d.to_rfc3339()),
            ],
        )?;
        Ok(())
    }

    fn update(&self, task: &Task) -> Result<(), TaskError> {
        let changed = self.conn.execute(
            "UPDATE tasks SET title = ?2, done = ?3, priority = ?4, due_date = ?5 WHERE id = ?1",
            params![
                task.id,
                task.title,
                task.done,
                task.priority.ordinal(),
                task.due_date.map(|d| d.to_rfc3339()),
            ],
        )?;
        if changed == 0 {
            return Err(TaskError::not_found(&task.id));
        }
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), TaskError> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(TaskError::not_found(id));
        }
        Ok(())
    }

    fn stats(&self) -> Result<TaskStats, TaskError> {
        // One aggregate pass, one round trip.
        let stats = self.conn.query_row(
            "SELECT COUNT(*),
                    COUNT(CASE WHEN done = 0 THEN 1 END),
                    COUNT(CASE WHEN done = 1 THEN 1 END)
             FROM tasks",
            [],
            |row| {
                Ok(TaskStats {
                    total: row.get(0)?,
                    active: row.get(1)?,
                    completed: row.get(2)?,
                })
            },
        )?;
        Ok(stats)
    }

    fn close(self: Box<Self>) -> Result<(), TaskError> {
        self.conn.close().map_err(|(_, e)| TaskError::from(e))
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    let due: Option<String> = row.get(5)?;
    let due_date = match due {
        Some(raw) => Some(datetime_from_sql(5, &raw)?),
        None => None,
    };
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        done: row.get(2)?,
        created_at: datetime_from_sql(3, &row.get::<_, String>(3)?)?,
        priority: Priority::from_ordinal(row.get(4)?),
        due_date,
    })
}

/// Timestamps are stored as RFC 3339 UTC text, which keeps their textual
/// sort order equal to their chronological order.
fn datetime_from_sql(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
