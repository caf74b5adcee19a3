//! Repository port for the remote task store.

use crate::task::domain::{NewTask, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations translate three operations onto the remote task store.
/// The store owns identity and creation timestamps, so `create` returns
/// nothing; callers re-fetch through `list` to observe the assigned id.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetches all tasks ordered by creation timestamp, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Transport`] on network or HTTP
    /// failure, carrying the store-provided error message when one is
    /// available.
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Inserts one task. The store assigns the identifier and creation
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Transport`] when the insert is
    /// rejected or the store is unreachable.
    async fn create(&self, draft: &NewTask) -> TaskRepositoryResult<()>;

    /// Applies a partial patch to exactly one task addressed by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the implementation
    /// can tell the task no longer exists, or
    /// [`TaskRepositoryError::Transport`] on network or HTTP failure.
    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Network or HTTP failure. The message is the store's
    /// `status_message` when the response body carried one, otherwise the
    /// transport's generic error text.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Persisted rows could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a transport-level error into its message form.
    #[must_use]
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }
}
