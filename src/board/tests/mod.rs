//! Unit tests for the task board module.


use crate::board::{
    adapters::clock::FixedClock,
    domain::{Completion, CompletionStatus, NewTask, Task, TaskKind, UserId},
};
use chrono::{DateTime, TimeDelta, Utc};

/// Evaluation instant shared by the board tests: 2026-03-14T12:00:00Z.
pub(super) fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_773_489_600, 0).expect("valid fixed timestamp")
}

pub(super) fn hours_ago(hours: i64) -> DateTime<Utc> {
    now() - TimeDelta::hours(hours)
}

pub(super) fn hours_ahead(hours: i64) -> DateTime<Utc> {
    now() + TimeDelta::hours(hours)
}

/// Creates a task stamped at `created_at`.
pub(super) fn task_created_at(request: NewTask, created_at: DateTime<Utc>) -> Task {
    Task::create(request, &FixedClock::new(created_at)).expect("valid task request")
}

/// Creates an active custom task worth `points`, created a month ago.
pub(super) fn task(title: &str, points: u32) -> Task {
    task_created_at(NewTask::new(title, points, TaskKind::Custom), now() - TimeDelta::days(30))
}

/// Creates a task from a request, created a month ago.
pub(super) fn task_from(request: NewTask) -> Task {
    task_created_at(request, now() - TimeDelta::days(30))
}

/// Records a completion of `task` submitted at `completed_at`.
pub(super) fn completion(
    task: &Task,
    completed_at: DateTime<Utc>,
    status: CompletionStatus,
) -> Completion {
    Completion::submit(task.id(), UserId::new(), &FixedClock::new(completed_at)).with_status(status)
}

/// Returns the titles of a sequence of tasks.
pub(super) fn titles<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a str> {
    tasks.into_iter().map(Task::title).collect()
}
