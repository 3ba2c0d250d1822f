//! Lifecycle categorization of a user's assigned tasks.
//!
//! Given a snapshot of assigned tasks and the user's completion records, each
//! task is placed in exactly one of four buckets (or dropped), and each bucket
//! is ordered and truncated for display.
//!
//! Precedence, evaluated per task:
//!
//! 1. Without a completion, an expired task is missed, an active task is
//!    active, and anything else is dropped.
//! 2. A completion with `missed_at` is missed whatever its status.
//! 3. Otherwise the review status decides. A pending completion older than
//!    the review timeout is missed and displayed as rejected.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

use super::organizer::Organizable;
use super::priority;
use crate::board::domain::{Completion, CompletionStatus, Task, TaskId, Urgency};

/// Lifecycle bucket of a task from the acting user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleBucket {
    /// Open for completion.
    Active,
    /// Submitted and awaiting review.
    PendingReview,
    /// Approved.
    Completed,
    /// Lost through expiry, rejection or review timeout.
    Missed,
}

impl LifecycleBucket {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::PendingReview => "pending_review",
            Self::Completed => "completed",
            Self::Missed => "missed",
        }
    }

    /// Returns whether the categorizer never moves a task out of this bucket.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Missed)
    }
}

impl TryFrom<&str> for LifecycleBucket {
    type Error = ParseLifecycleBucketError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "pending_review" | "pending" => Ok(Self::PendingReview),
            "completed" => Ok(Self::Completed),
            "missed" => Ok(Self::Missed),
            _ => Err(ParseLifecycleBucketError(value.to_owned())),
        }
    }
}

/// Error returned while parsing lifecycle bucket names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lifecycle bucket: {0}")]
pub struct ParseLifecycleBucketError(pub String);

/// Limits applied by the categorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleConfig {
    /// Visible head size of the pending, completed and missed buckets.
    pub visible_limit: usize,
    /// Hard cap on the active bucket.
    pub active_cap: usize,
    /// Age after which a pending completion counts as rejected.
    pub review_timeout: TimeDelta,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            visible_limit: 5,
            active_cap: 5,
            review_timeout: TimeDelta::hours(48),
        }
    }
}

/// Bucket and displayed status chosen for one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Lifecycle bucket.
    pub bucket: LifecycleBucket,
    /// Status to display, when the task has a completion.
    pub displayed_status: Option<CompletionStatus>,
}

/// Classifies a single task against its completion record, if any.
///
/// Returns `None` for an inactive, unexpired task without a completion.
#[must_use]
pub fn classify(
    task: &Task,
    completion: Option<&Completion>,
    now: DateTime<Utc>,
    config: &LifecycleConfig,
) -> Option<Classification> {
    let Some(completion) = completion else {
        let bucket = if task.is_expired(now) {
            LifecycleBucket::Missed
        } else if task.is_active() {
            LifecycleBucket::Active
        } else {
            return None;
        };
        return Some(Classification {
            bucket,
            displayed_status: None,
        });
    };

    let status = completion.status();
    let (bucket, displayed) = if completion.missed_at().is_some() {
        (LifecycleBucket::Missed, status)
    } else {
        match status {
            CompletionStatus::Pending
                if now - completion.completed_at() > config.review_timeout =>
            {
                (LifecycleBucket::Missed, CompletionStatus::Rejected)
            }
            CompletionStatus::Pending => (LifecycleBucket::PendingReview, status),
            CompletionStatus::Approved | CompletionStatus::AutoApproved => {
                (LifecycleBucket::Completed, status)
            }
            CompletionStatus::Rejected => (LifecycleBucket::Missed, status),
        }
    };

    Some(Classification {
        bucket,
        displayed_status: Some(displayed),
    })
}

/// Presentation-ready projection of a task and its completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifecycleItem {
    task: Task,
    bucket: LifecycleBucket,
    is_completed: bool,
    completed_today: bool,
    last_completed_at: Option<DateTime<Utc>>,
    completion_status: Option<CompletionStatus>,
    missed_at: Option<DateTime<Utc>>,
    urgency: Urgency,
    priority: i64,
}

impl LifecycleItem {
    fn new(
        task: &Task,
        completion: Option<&Completion>,
        classification: Classification,
        now: DateTime<Utc>,
    ) -> Self {
        let last_completed_at = completion.map(Completion::completed_at);
        Self {
            task: task.clone(),
            bucket: classification.bucket,
            is_completed: completion.is_some(),
            completed_today: last_completed_at
                .is_some_and(|completed_at| completed_at.date_naive() == now.date_naive()),
            last_completed_at,
            completion_status: classification.displayed_status,
            missed_at: completion.and_then(Completion::missed_at),
            urgency: Urgency::of(task, now),
            priority: priority::score(task, now),
        }
    }

    /// Returns the underlying task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the lifecycle bucket.
    #[must_use]
    pub const fn bucket(&self) -> LifecycleBucket {
        self.bucket
    }

    /// Returns whether the user has submitted the task.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns whether the submission happened on the evaluation day (UTC).
    #[must_use]
    pub const fn completed_today(&self) -> bool {
        self.completed_today
    }

    /// Returns the submission timestamp, if any.
    #[must_use]
    pub const fn last_completed_at(&self) -> Option<DateTime<Utc>> {
        self.last_completed_at
    }

    /// Returns the status to display, if the task has a completion.
    #[must_use]
    pub const fn completion_status(&self) -> Option<CompletionStatus> {
        self.completion_status
    }

    /// Returns the missed-before-review timestamp, if any.
    #[must_use]
    pub const fn missed_at(&self) -> Option<DateTime<Utc>> {
        self.missed_at
    }

    /// Returns the display urgency at evaluation time.
    #[must_use]
    pub const fn urgency(&self) -> Urgency {
        self.urgency
    }

    /// Returns the priority score at evaluation time.
    #[must_use]
    pub const fn priority(&self) -> i64 {
        self.priority
    }

    fn missed_sort_key(&self) -> Option<DateTime<Utc>> {
        self.last_completed_at.or_else(|| self.task.expires_at())
    }
}

impl Organizable for LifecycleItem {
    fn task(&self) -> &Task {
        &self.task
    }

    fn is_done(&self) -> bool {
        self.bucket == LifecycleBucket::Completed
    }
}

/// Bucket split into a visible head and an overflow tail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PagedBucket {
    visible: Vec<LifecycleItem>,
    overflow: Vec<LifecycleItem>,
}

impl PagedBucket {
    fn split(mut items: Vec<LifecycleItem>, visible_limit: usize) -> Self {
        let overflow = items.split_off(visible_limit.min(items.len()));
        Self {
            visible: items,
            overflow,
        }
    }

    /// Returns the items shown by default.
    #[must_use]
    pub fn visible(&self) -> &[LifecycleItem] {
        &self.visible
    }

    /// Returns the items beyond the visible head.
    #[must_use]
    pub fn overflow(&self) -> &[LifecycleItem] {
        &self.overflow
    }

    /// Returns the total number of items in the bucket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len() + self.overflow.len()
    }

    /// Returns whether the bucket holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.overflow.is_empty()
    }

    /// Iterates over visible then overflow items.
    pub fn iter(&self) -> impl Iterator<Item = &LifecycleItem> {
        self.visible.iter().chain(self.overflow.iter())
    }
}

/// Four-bucket lifecycle view for one user.
///
/// The active list is capped and has no overflow; the other buckets are
/// paged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorizedTasks {
    active: Vec<LifecycleItem>,
    pending: PagedBucket,
    completed: PagedBucket,
    missed: PagedBucket,
}

impl CategorizedTasks {
    /// Returns the capped active list in collection order.
    #[must_use]
    pub fn active(&self) -> &[LifecycleItem] {
        &self.active
    }

    /// Returns the pending-review bucket, oldest submission first.
    #[must_use]
    pub const fn pending(&self) -> &PagedBucket {
        &self.pending
    }

    /// Returns the completed bucket, most recent first.
    #[must_use]
    pub const fn completed(&self) -> &PagedBucket {
        &self.completed
    }

    /// Returns the missed bucket, most recently lost first.
    #[must_use]
    pub const fn missed(&self) -> &PagedBucket {
        &self.missed
    }
}

/// Categorizes tasks with the default limits.
#[must_use]
pub fn categorize(
    tasks: &[Task],
    completions: &[Completion],
    now: DateTime<Utc>,
) -> CategorizedTasks {
    categorize_with(tasks, completions, now, &LifecycleConfig::default())
}

/// Categorizes tasks against the user's completions at `now`.
#[must_use]
pub fn categorize_with(
    tasks: &[Task],
    completions: &[Completion],
    now: DateTime<Utc>,
    config: &LifecycleConfig,
) -> CategorizedTasks {
    let latest = latest_completions(completions);
    let mut active = Vec::new();
    let mut pending = Vec::new();
    let mut completed = Vec::new();
    let mut missed = Vec::new();

    for task in tasks {
        let completion = latest.get(&task.id()).copied();
        let Some(classification) = classify(task, completion, now, config) else {
            trace!(task_id = %task.id(), "inactive task without completion left out of every bucket");
            continue;
        };
        let item = LifecycleItem::new(task, completion, classification, now);
        match item.bucket {
            LifecycleBucket::Active => active.push(item),
            LifecycleBucket::PendingReview => pending.push(item),
            LifecycleBucket::Completed => completed.push(item),
            LifecycleBucket::Missed => missed.push(item),
        }
    }

    let active_total = active.len();
    active.truncate(config.active_cap);
    pending.sort_by_key(|item| item.last_completed_at);
    completed.sort_by(|a, b| b.last_completed_at.cmp(&a.last_completed_at));
    missed.sort_by(|a, b| b.missed_sort_key().cmp(&a.missed_sort_key()));

    debug!(
        active = active.len(),
        active_unlisted = active_total - active.len(),
        pending = pending.len(),
        completed = completed.len(),
        missed = missed.len(),
        "categorized task snapshot"
    );

    CategorizedTasks {
        active,
        pending: PagedBucket::split(pending, config.visible_limit),
        completed: PagedBucket::split(completed, config.visible_limit),
        missed: PagedBucket::split(missed, config.visible_limit),
    }
}

/// Keeps the most recent completion per task; earlier entries win ties.
fn latest_completions(completions: &[Completion]) -> HashMap<TaskId, &Completion> {
    let mut latest: HashMap<TaskId, &Completion> = HashMap::with_capacity(completions.len());
    for completion in completions {
        match latest.entry(completion.task_id()) {
            Entry::Vacant(slot) => {
                slot.insert(completion);
            }
            Entry::Occupied(mut slot) => {
                if completion.completed_at() > slot.get().completed_at() {
                    slot.insert(completion);
                }
            }
        }
    }
    latest
}
