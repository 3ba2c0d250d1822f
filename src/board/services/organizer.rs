//! Filtering, ordering and pagination of flat task collections.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::priority;
use crate::board::domain::{Task, TaskKind};

/// Item that can be arranged by [`organize`].
pub trait Organizable {
    /// Returns the task the item displays.
    fn task(&self) -> &Task;

    /// Returns whether the item counts as completed for status filtering.
    fn is_done(&self) -> bool {
        false
    }
}

impl Organizable for Task {
    fn task(&self) -> &Task {
        self
    }
}

/// Ordering applied to the filtered collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Highest priority score first.
    #[default]
    Priority,
    /// Nearest scheduled deadline first; undated tasks last.
    Deadline,
    /// Highest point reward first.
    Points,
    /// Newest task first.
    Created,
}

impl SortOrder {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Deadline => "deadline",
            Self::Points => "points",
            Self::Created => "created",
        }
    }
}

impl TryFrom<&str> for SortOrder {
    type Error = ParseSortOrderError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "deadline" => Ok(Self::Deadline),
            "points" => Ok(Self::Points),
            "created" => Ok(Self::Created),
            _ => Err(ParseSortOrderError(value.to_owned())),
        }
    }
}

/// Error returned while parsing sort orders.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort order: {0}")]
pub struct ParseSortOrderError(pub String);

/// Status predicate for [`TaskFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Active, unexpired and not completed.
    Active,
    /// Completed.
    Completed,
    /// Past the hard expiry.
    Expired,
}

impl StatusFilter {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Expired => "expired",
        }
    }

    fn matches(self, item: &impl Organizable, now: DateTime<Utc>) -> bool {
        let task = item.task();
        match self {
            Self::Active => task.is_completable(now) && !item.is_done(),
            Self::Completed => item.is_done(),
            Self::Expired => task.is_expired(now),
        }
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = ParseStatusFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "expired" => Ok(Self::Expired),
            _ => Err(ParseStatusFilterError(value.to_owned())),
        }
    }
}

/// Error returned while parsing status filters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status filter: {0}")]
pub struct ParseStatusFilterError(pub String);

/// Predicates applied before sorting. Present predicates are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskFilter {
    /// Required status.
    pub status: Option<StatusFilter>,
    /// Required task kind.
    pub kind: Option<TaskKind>,
    /// Required time-sensitivity flag.
    pub time_sensitive: Option<bool>,
}

impl TaskFilter {
    fn matches(&self, item: &impl Organizable, now: DateTime<Utc>) -> bool {
        let task = item.task();
        self.status.is_none_or(|status| status.matches(item, now))
            && self.kind.is_none_or(|kind| task.kind() == kind)
            && self
                .time_sensitive
                .is_none_or(|flag| task.is_time_sensitive() == flag)
    }
}

/// Display settings for [`organize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of items in the visible slice.
    pub box_count: usize,
    /// Ordering of the filtered collection.
    pub sort_by: SortOrder,
    /// Predicates applied before ordering.
    pub filter: TaskFilter,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            box_count: 10,
            sort_by: SortOrder::Priority,
            filter: TaskFilter::default(),
        }
    }
}

impl DisplayConfig {
    /// Sets the visible slice size.
    #[must_use]
    pub const fn with_box_count(mut self, box_count: usize) -> Self {
        self.box_count = box_count;
        self
    }

    /// Sets the ordering.
    #[must_use]
    pub const fn sorted_by(mut self, sort_by: SortOrder) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Sets the filter.
    #[must_use]
    pub fn filtered_by(mut self, filter: TaskFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Filtered collection split into a visible slice and an overflow tail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizedTasks<T> {
    visible: Vec<T>,
    overflow: Vec<T>,
    total_count: usize,
}

impl<T> OrganizedTasks<T> {
    /// Returns the items shown by default.
    #[must_use]
    pub fn visible(&self) -> &[T] {
        &self.visible
    }

    /// Returns the items beyond the visible slice.
    #[must_use]
    pub fn overflow(&self) -> &[T] {
        &self.overflow
    }

    /// Returns the number of items that passed the filter.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.total_count
    }
}

/// Filters, sorts and slices `items` without modifying them.
///
/// All orderings are stable: items that compare equal keep their input
/// order.
#[must_use]
pub fn organize<T>(items: &[T], config: &DisplayConfig, now: DateTime<Utc>) -> OrganizedTasks<T>
where
    T: Organizable + Clone,
{
    let mut filtered: Vec<T> = items
        .iter()
        .filter(|item| config.filter.matches(*item, now))
        .cloned()
        .collect();

    match config.sort_by {
        SortOrder::Priority => filtered.sort_by_cached_key(|item| {
            std::cmp::Reverse(priority::score(item.task(), now))
        }),
        SortOrder::Deadline => filtered.sort_by(|a, b| {
            compare_deadlines(a.task().scheduled_deadline(), b.task().scheduled_deadline())
        }),
        SortOrder::Points => {
            filtered.sort_by(|a, b| b.task().points().cmp(&a.task().points()));
        }
        SortOrder::Created => {
            filtered.sort_by(|a, b| b.task().created_at().cmp(&a.task().created_at()));
        }
    }

    let total_count = filtered.len();
    let overflow = filtered.split_off(config.box_count.min(total_count));
    debug!(
        input = items.len(),
        total_count,
        visible = filtered.len(),
        sort_by = config.sort_by.as_str(),
        "organized task collection"
    );

    OrganizedTasks {
        visible: filtered,
        overflow,
        total_count,
    }
}

/// Ascending by deadline with undated entries after every dated one.
fn compare_deadlines(left: Option<DateTime<Utc>>, right: Option<DateTime<Utc>>) -> Ordering {
    match (left, right) {
        (Some(left_deadline), Some(right_deadline)) => left_deadline.cmp(&right_deadline),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
