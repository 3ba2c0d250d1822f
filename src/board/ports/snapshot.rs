//! Port through which services load one user's task snapshot.

use crate::board::domain::{Completion, Task, TaskId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot repository operations.
pub type TaskSnapshotResult<T> = Result<T, TaskSnapshotError>;

/// Read access to the tasks assigned to a user and their completions.
///
/// Implementations return owned collections; callers treat them as an
/// immutable snapshot for the duration of one categorization pass.
#[async_trait]
pub trait TaskSnapshotRepository: Send + Sync {
    /// Returns the tasks assigned to `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSnapshotError::Persistence`] when the backing store
    /// cannot be read.
    async fn assigned_tasks(&self, user_id: UserId) -> TaskSnapshotResult<Vec<Task>>;

    /// Returns the completion records belonging to `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSnapshotError::Persistence`] when the backing store
    /// cannot be read.
    async fn completions(&self, user_id: UserId) -> TaskSnapshotResult<Vec<Completion>>;
}

/// Errors returned by snapshot repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskSnapshotError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The referenced task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskSnapshotError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
