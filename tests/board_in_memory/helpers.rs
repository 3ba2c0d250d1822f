//! Shared fixtures for board integration tests.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use rewardboard::board::{
    adapters::{clock::FixedClock, memory::InMemorySnapshotRepository},
    domain::{Completion, CompletionStatus, NewTask, Task, UserId},
    services::TaskBoardService,
};
use rstest::fixture;

/// Service type exercised by the integration tests.
pub type TestService = TaskBoardService<InMemorySnapshotRepository, FixedClock>;

/// Evaluation instant: 2026-03-14T12:00:00Z.
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_773_489_600, 0).expect("valid fixed timestamp")
}

/// Returns the instant `hours` before [`now`].
pub fn hours_ago(hours: i64) -> DateTime<Utc> {
    now() - TimeDelta::hours(hours)
}

/// Seeded repository together with the user whose board is inspected.
pub struct Board {
    pub repository: Arc<InMemorySnapshotRepository>,
    pub user: UserId,
}

impl Board {
    /// Creates, stores and assigns a task.
    pub fn assign(&self, request: NewTask) -> Task {
        let task = Task::create(request, &FixedClock::new(now() - TimeDelta::days(7)))
            .expect("valid task request");
        self.repository
            .insert_task(task.clone())
            .expect("task insert should succeed");
        self.repository
            .assign(self.user, task.id())
            .expect("assignment should succeed");
        task
    }

    /// Records a submission of `task` at `completed_at` with `status`.
    pub fn submit(&self, task: &Task, completed_at: DateTime<Utc>, status: CompletionStatus) {
        let completion = Completion::submit(task.id(), self.user, &FixedClock::new(completed_at))
            .with_status(status);
        self.repository
            .record_completion(completion)
            .expect("completion should be recorded");
    }

    /// Builds a service whose clock is frozen at [`now`].
    pub fn service(&self) -> TestService {
        TaskBoardService::new(
            Arc::clone(&self.repository),
            Arc::new(FixedClock::new(now())),
        )
    }
}

/// Provides an empty board for a fresh user.
#[fixture]
pub fn board() -> Board {
    Board {
        repository: Arc::new(InMemorySnapshotRepository::new()),
        user: UserId::new(),
    }
}
