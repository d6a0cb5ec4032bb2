//! Flat-file backend persisting the whole task set as one pretty-printed
//! JSON array.
//!
//! Every mutation is a full load-modify-save cycle, and `list` applies the
//! same filter and sort semantics as the SQLite backend, expressed as an
//! in-memory comparator. Saves go through a sibling temp file and a rename
//! so a failed write never leaves a partially-serialized document behind.
//! There is no file locking: two processes mutating the same file can race
//! and lose an update. That matches the single-user design.

use std::cmp::Ordering;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::TaskError;
use crate::models::{SortKey, StatusFilter, Task, TaskFilter, TaskStats};
use crate::repository::TaskRepository;

/// Task repository persisting to a single JSON file.
pub struct JsonTaskRepository {
    path: PathBuf,
}

impl JsonTaskRepository {
    /// Creates a repository backed by the file at `path`. The file and its
    /// parent directory are created on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonTaskRepository { path: path.into() }
    }

    /// Loads the full task set. A missing file is an empty set, not an
    /// error — a fresh store has no prior state.
    fn load(&self) -> Result<Vec<Task>, TaskError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), TaskError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        // Serialize fully before touching the disk, then swap the new
        // document into place.
        let data = serde_json::to_string_pretty(tasks)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved task set");
        Ok(())
    }
}

impl TaskRepository for JsonTaskRepository {
    fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>, TaskError> {
        let mut tasks = self.load()?;
        match filter.status {
            StatusFilter::Active => tasks.retain(|t| !t.done),
            StatusFilter::Completed => tasks.retain(|t| t.done),
            StatusFilter::All => {}
        }
        let key = filter.sort_by;
        tasks.sort_by(|a, b| compare_tasks(key, a, b));
        Ok(tasks)
    }

    fn get(&self, id: &str) -> Result<Task, TaskError> {
        self.load()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskError::not_found(id))
    }

    fn create(&self, task: &Task) -> Result<(), TaskError> {
        let mut tasks = self.load()?;
        if tasks.iter().any(|t| t.id == task.id) {
            return Err(TaskError::Conflict(task.id.clone()));
        }
        tasks.push(task.clone());
        self.save(&tasks)
    }

    fn update(&self, task: &Task) -> Result<(), TaskError> {
        let mut tasks = self.load()?;
        let stored = tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(|| TaskError::not_found(&task.id))?;
        // Same column set the SQL UPDATE touches; created_at stays.
        stored.title = task.title.clone();
        stored.done = task.done;
        stored.priority = task.priority;
        stored.due_date = task.due_date;
        self.save(&tasks)
    }

    fn delete(&self, id: &str) -> Result<(), TaskError> {
        let mut tasks = self.load()?;
        let idx = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TaskError::not_found(id))?;
        tasks.remove(idx);
        self.save(&tasks)
    }

    fn stats(&self) -> Result<TaskStats, TaskError> {
        let tasks = self.load()?;
        let mut stats = TaskStats {
            total: tasks.len() as u32,
            ..TaskStats::default()
        };
        for task in &tasks {
            if task.done {
                stats.completed += 1;
            } else {
                stats.active += 1;
            }
        }
        Ok(stats)
    }

    fn close(self: Box<Self>) -> Result<(), TaskError> {
        Ok(())
    }
}

/// One comparator chain per sort key, mirroring the SQLite ORDER BY:
/// priority descending, or due date ascending with absent dates after
/// every present one, or creation time descending. Creation time
/// descending tie-breaks everything, including two absent due dates.
fn compare_tasks(key: SortKey, a: &Task, b: &Task) -> Ordering {
    let recency = || b.created_at.cmp(&a.created_at);
    match key {
        SortKey::Priority => b.priority.cmp(&a.priority).then_with(recency),
        SortKey::DueDate => match (a.due_date, b.due_date) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(recency),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => recency(),
        },
        SortKey::CreatedAt => recency(),
    }
}
