//! Service that loads a user's snapshot and builds board views.

use crate::board::{
    domain::{Task, UserId},
    ports::{TaskSnapshotError, TaskSnapshotRepository},
    services::{
        lifecycle::{self, CategorizedTasks, LifecycleConfig},
        organizer::{self, DisplayConfig, OrganizedTasks},
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Loading the snapshot failed.
    #[error(transparent)]
    Snapshot(#[from] TaskSnapshotError),
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Builds lifecycle views and task feeds for a user.
///
/// The clock is sampled once per request so that every rule in one pass sees
/// the same instant.
#[derive(Clone)]
pub struct TaskBoardService<R, C>
where
    R: TaskSnapshotRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: LifecycleConfig,
}

impl<R, C> TaskBoardService<R, C>
where
    R: TaskSnapshotRepository,
    C: Clock + Send + Sync,
{
    /// Creates a board service with the default lifecycle limits.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, LifecycleConfig::default())
    }

    /// Creates a board service with custom lifecycle limits.
    #[must_use]
    pub const fn with_config(repository: Arc<R>, clock: Arc<C>, config: LifecycleConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Returns the lifecycle limits in use.
    #[must_use]
    pub const fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    /// Categorizes the user's assigned tasks into lifecycle buckets.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Snapshot`] when tasks or completions cannot
    /// be loaded.
    pub async fn lifecycle_view(&self, user_id: UserId) -> TaskBoardResult<CategorizedTasks> {
        let now = self.clock.utc();
        let tasks = self.repository.assigned_tasks(user_id).await?;
        let completions = self.repository.completions(user_id).await?;
        debug!(
            %user_id,
            tasks = tasks.len(),
            completions = completions.len(),
            "building lifecycle view"
        );
        Ok(lifecycle::categorize_with(
            &tasks,
            &completions,
            now,
            &self.config,
        ))
    }

    /// Arranges the user's assigned tasks as a flat feed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Snapshot`] when tasks cannot be loaded.
    pub async fn task_feed(
        &self,
        user_id: UserId,
        display: &DisplayConfig,
    ) -> TaskBoardResult<OrganizedTasks<Task>> {
        let now = self.clock.utc();
        let tasks = self.repository.assigned_tasks(user_id).await?;
        debug!(%user_id, tasks = tasks.len(), "building task feed");
        Ok(organizer::organize(&tasks, display, now))
    }
}
