//! Business logic over the repository contract: input validation, id and
//! timestamp assignment, and nothing else. The service never knows which
//! backend is behind the trait object.

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::error::TaskError;
use crate::models::{Priority, Task, TaskFilter, TaskStats};
use crate::repository::TaskRepository;

/// Task service owning the active storage backend.
pub struct TaskService {
    repo: Box<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repo: Box<dyn TaskRepository>) -> Self {
        TaskService { repo }
    }

    /// Creates a task from user input. The title is trimmed and must not
    /// be empty afterwards; id and creation timestamp are assigned here,
    /// never by the caller.
    pub fn add_task(
        &self,
        title: &str,
        priority: Priority,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<Task, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::invalid_argument("task title cannot be empty"));
        }

        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            done: false,
            created_at: Utc::now(),
            priority,
            due_date,
        };
        self.repo.create(&task)?;
        debug!(id = %task.id, "task created");
        Ok(task)
    }

    /// Deletes a task by id. Unknown ids surface as `NotFound`.
    pub fn delete_task(&self, id: &str) -> Result<(), TaskError> {
        if id.is_empty() {
            return Err(TaskError::invalid_argument("task id cannot be empty"));
        }
        self.repo.delete(id)
    }

    /// Flips the completion flag of a task and returns the updated task.
    /// Toggling twice restores the original state.
    pub fn toggle_task(&self, id: &str) -> Result<Task, TaskError> {
        if id.is_empty() {
            return Err(TaskError::invalid_argument("task id cannot be empty"));
        }
        let mut task = self.repo.get(id)?;
        task.done = !task.done;
        self.repo.update(&task)?;
        debug!(id = %task.id, done = task.done, "task toggled");
        Ok(task)
    }

    /// Lists tasks; filtering and sorting are entirely the backend's job.
    pub fn tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, TaskError> {
        self.repo.list(filter)
    }

    pub fn stats(&self) -> Result<TaskStats, TaskError> {
        self.repo.stats()
    }

    /// Shuts the backend down, releasing its resources.
    pub fn close(self) -> Result<(), TaskError> {
        self.repo.close()
    }
}
