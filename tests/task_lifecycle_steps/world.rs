//! Shared world state for task lifecycle BDD scenarios.

use chrono::{DateTime, TimeDelta, Utc};
use rewardboard::board::{
    domain::{Completion, Task},
    services::{CategorizedTasks, LifecycleItem},
};
use rstest::fixture;

/// Scenario world for lifecycle categorization behaviour tests.
pub struct LifecycleWorld {
    pub now: DateTime<Utc>,
    pub tasks: Vec<Task>,
    pub completions: Vec<Completion>,
    pub view: Option<CategorizedTasks>,
}

impl LifecycleWorld {
    /// Creates a world evaluated at 2026-03-14T12:00:00Z.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: DateTime::from_timestamp(1_773_489_600, 0).unwrap_or_default(),
            tasks: Vec::new(),
            completions: Vec::new(),
            view: None,
        }
    }

    /// Returns the instant `hours` before the evaluation time.
    pub fn hours_ago(&self, hours: i64) -> DateTime<Utc> {
        self.now - TimeDelta::hours(hours)
    }

    /// Finds a seeded task by title.
    pub fn task(&self, title: &str) -> Result<&Task, eyre::Report> {
        self.tasks
            .iter()
            .find(|task| task.title() == title)
            .ok_or_else(|| eyre::eyre!("no task titled {title} in scenario world"))
    }

    /// Finds the categorized item for a task title.
    pub fn item(&self, title: &str) -> Result<&LifecycleItem, eyre::Report> {
        let view = self
            .view
            .as_ref()
            .ok_or_else(|| eyre::eyre!("board has not been categorized"))?;
        view.active()
            .iter()
            .chain(view.pending().iter())
            .chain(view.completed().iter())
            .chain(view.missed().iter())
            .find(|item| item.task().title() == title)
            .ok_or_else(|| eyre::eyre!("task {title} is not in any bucket"))
    }
}

impl Default for LifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LifecycleWorld {
    LifecycleWorld::default()
}
