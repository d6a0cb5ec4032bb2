use crate::error::TaskError;
use crate::models::{Task, TaskFilter, TaskStats};

/// Data-access contract implemented by every storage backend.
///
/// The service layer only ever talks to this trait, so both backends must
/// keep identical observable semantics: the same filter and sort results
/// for `list`, `NotFound` for absent ids on `get`/`update`/`delete`, and a
/// deterministic rejection of duplicate ids on `create`.
pub trait TaskRepository {
    /// Retrieves tasks matching the filter, in the filter's sort order.
    fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>, TaskError>;

    /// Retrieves a single task by id.
    fn get(&self, id: &str) -> Result<Task, TaskError>;

    /// Persists a new task. Fails if the id already exists.
    fn create(&self, task: &Task) -> Result<(), TaskError>;

    /// Replaces the mutable fields of an existing task. `created_at` is
    /// never touched.
    fn update(&self, task: &Task) -> Result<(), TaskError>;

    /// Removes a task by id.
    fn delete(&self, id: &str) -> Result<(), TaskError>;

    /// Computes total/active/completed counts in one pass.
    fn stats(&self) -> Result<TaskStats, TaskError>;

    /// Releases the backend, flushing or closing any held resources.
    fn close(self: Box<Self>) -> Result<(), TaskError>;
}
