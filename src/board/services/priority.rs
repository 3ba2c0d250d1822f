//! Priority scoring for default task ordering.

use crate::board::domain::{DeadlineBand, Task};
use chrono::{DateTime, Utc};

/// Bonus applied to tasks flagged as time-sensitive.
pub const TIME_SENSITIVE_BONUS: i64 = 1000;

/// Penalty applied when the scheduled deadline has already passed.
pub const STALE_DEADLINE_PENALTY: i64 = 500;

/// Returns the deadline contribution for a band.
#[must_use]
pub const fn deadline_weight(band: DeadlineBand) -> i64 {
    match band {
        DeadlineBand::Past => -STALE_DEADLINE_PENALTY,
        DeadlineBand::WithinHour => 500,
        DeadlineBand::WithinDay => 300,
        DeadlineBand::WithinWeek => 100,
        DeadlineBand::Distant => 0,
    }
}

/// Computes the ordering priority of a task at `now`.
///
/// Blends the time-sensitivity flag, the banded distance to the scheduled
/// deadline, and the point reward. The hard expiry plays no part here.
#[must_use]
pub fn score(task: &Task, now: DateTime<Utc>) -> i64 {
    let escalation = if task.is_time_sensitive() {
        TIME_SENSITIVE_BONUS
    } else {
        0
    };
    let deadline = task
        .scheduled_deadline()
        .map_or(0, |deadline| deadline_weight(DeadlineBand::classify(deadline, now)));

    escalation + deadline + i64::from(task.points().value())
}
