use thiserror::Error;

/// Errors produced by the repository and service layers.
///
/// `InvalidArgument` and `NotFound` are user-correctable; everything else
/// is a storage fault that should propagate to the caller as a hard
/// failure. No operation retries on error.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Caller passed an unusable value (empty title, empty id).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No task with the given id exists in the store.
    #[error("task with id {0} not found")]
    NotFound(String),

    /// A task with the given id already exists.
    #[error("task with id {0} already exists")]
    Conflict(String),

    /// Underlying database failure, including unique-key violations.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// File I/O failure in the flat-file backend.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be serialized or parsed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TaskError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        TaskError::InvalidArgument(msg.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        TaskError::NotFound(id.into())
    }

    /// True for system-level faults, as opposed to errors the caller can
    /// correct by changing the request.
    pub fn is_storage_fault(&self) -> bool {
        !matches!(
            self,
            TaskError::InvalidArgument(_) | TaskError::NotFound(_)
        )
    }
}
