//! Deadline banding and urgency classification.
//!
//! Deadlines are bucketed into coarse bands so that small differences in the
//! evaluation instant do not reorder tasks between renders.

use super::Task;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Coarse distance between an instant and a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineBand {
    /// The deadline lies strictly in the past.
    Past,
    /// Less than one hour remains.
    WithinHour,
    /// Less than one day remains.
    WithinDay,
    /// Less than one week remains.
    WithinWeek,
    /// One week or more remains.
    Distant,
}

impl DeadlineBand {
    /// Returns the tightest band containing `deadline` as seen from `now`.
    #[must_use]
    pub fn classify(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = deadline - now;
        if remaining < TimeDelta::zero() {
            Self::Past
        } else if remaining < TimeDelta::hours(1) {
            Self::WithinHour
        } else if remaining < TimeDelta::days(1) {
            Self::WithinDay
        } else if remaining < TimeDelta::weeks(1) {
            Self::WithinWeek
        } else {
            Self::Distant
        }
    }
}

/// Display urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// No pressing deadline.
    Low,
    /// Deadline within a week.
    Medium,
    /// Deadline within a day.
    High,
    /// Deadline within the hour.
    Critical,
    /// Deadline already passed.
    Expired,
}

impl Urgency {
    /// Classifies a task by its nearest deadline.
    ///
    /// The nearest of `scheduled_deadline` and `expires_at` decides; tasks
    /// with neither are [`Urgency::Low`].
    #[must_use]
    pub fn of(task: &Task, now: DateTime<Utc>) -> Self {
        let nearest = match (task.scheduled_deadline(), task.expires_at()) {
            (Some(deadline), Some(expiry)) => Some(deadline.min(expiry)),
            (deadline, expiry) => deadline.or(expiry),
        };
        nearest.map_or(Self::Low, |deadline| {
            DeadlineBand::classify(deadline, now).into()
        })
    }

    /// Returns the canonical display representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
            Self::Expired => "expired",
        }
    }
}

impl From<DeadlineBand> for Urgency {
    fn from(band: DeadlineBand) -> Self {
        match band {
            DeadlineBand::Past => Self::Expired,
            DeadlineBand::WithinHour => Self::Critical,
            DeadlineBand::WithinDay => Self::High,
            DeadlineBand::WithinWeek => Self::Medium,
            DeadlineBand::Distant => Self::Low,
        }
    }
}
