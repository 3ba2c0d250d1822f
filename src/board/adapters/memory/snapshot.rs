//! In-memory snapshot repository for board tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{Completion, Task, TaskId, UserId},
    ports::{TaskSnapshotError, TaskSnapshotRepository, TaskSnapshotResult},
};

/// Thread-safe in-memory store of tasks, assignments and completions.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotRepository {
    state: Arc<RwLock<InMemorySnapshotState>>,
}

#[derive(Debug, Default)]
struct InMemorySnapshotState {
    tasks: HashMap<TaskId, Task>,
    assignments: HashMap<UserId, Vec<TaskId>>,
    completions: HashMap<UserId, Vec<Completion>>,
}

impl InMemorySnapshotRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a task definition.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSnapshotError::DuplicateTask`] when the task ID already
    /// exists.
    pub fn insert_task(&self, task: Task) -> TaskSnapshotResult<()> {
        let mut state = self.write()?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskSnapshotError::DuplicateTask(task.id()));
        }
        state.tasks.insert(task.id(), task);
        Ok(())
    }

    /// Assigns a stored task to a user. Repeated assignments are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSnapshotError::TaskNotFound`] when the task is unknown.
    pub fn assign(&self, user_id: UserId, task_id: TaskId) -> TaskSnapshotResult<()> {
        let mut state = self.write()?;
        if !state.tasks.contains_key(&task_id) {
            return Err(TaskSnapshotError::TaskNotFound(task_id));
        }
        let assigned = state.assignments.entry(user_id).or_default();
        if !assigned.contains(&task_id) {
            assigned.push(task_id);
        }
        Ok(())
    }

    /// Records a completion under its submitting user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSnapshotError::TaskNotFound`] when the referenced task is
    /// unknown.
    pub fn record_completion(&self, completion: Completion) -> TaskSnapshotResult<()> {
        let mut state = self.write()?;
        if !state.tasks.contains_key(&completion.task_id()) {
            return Err(TaskSnapshotError::TaskNotFound(completion.task_id()));
        }
        state
            .completions
            .entry(completion.user_id())
            .or_default()
            .push(completion);
        Ok(())
    }

    fn read(&self) -> TaskSnapshotResult<RwLockReadGuard<'_, InMemorySnapshotState>> {
        self.state.read().map_err(|err| {
            TaskSnapshotError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskSnapshotResult<RwLockWriteGuard<'_, InMemorySnapshotState>> {
        self.state.write().map_err(|err| {
            TaskSnapshotError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskSnapshotRepository for InMemorySnapshotRepository {
    async fn assigned_tasks(&self, user_id: UserId) -> TaskSnapshotResult<Vec<Task>> {
        let state = self.read()?;
        let tasks = state
            .assignments
            .get(&user_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    async fn completions(&self, user_id: UserId) -> TaskSnapshotResult<Vec<Completion>> {
        let state = self.read()?;
        Ok(state
            .completions
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }
}
