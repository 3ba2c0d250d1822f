//! Completion records for user task submissions.

use super::{CompletionId, ParseCompletionStatusError, TaskId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Review status of a completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    /// Submitted and awaiting review.
    #[default]
    Pending,
    /// Approved by a reviewer.
    Approved,
    /// Approved by automated verification.
    #[serde(alias = "auto-approved")]
    AutoApproved,
    /// Rejected by a reviewer.
    Rejected,
}

impl CompletionStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::AutoApproved => "auto_approved",
            Self::Rejected => "rejected",
        }
    }
}

impl TryFrom<&str> for CompletionStatus {
    type Error = ParseCompletionStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "auto_approved" => Ok(Self::AutoApproved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(ParseCompletionStatusError(value.to_owned())),
        }
    }
}

/// A user's record of having attempted a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    id: CompletionId,
    task_id: TaskId,
    user_id: UserId,
    completed_at: DateTime<Utc>,
    #[serde(default)]
    status: CompletionStatus,
    #[serde(default)]
    missed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCompletionData {
    /// Persisted completion identifier.
    pub id: CompletionId,
    /// Task the completion belongs to.
    pub task_id: TaskId,
    /// User who submitted the completion.
    pub user_id: UserId,
    /// Submission timestamp.
    pub completed_at: DateTime<Utc>,
    /// Persisted review status.
    pub status: CompletionStatus,
    /// Timestamp at which the task expired before review, if any.
    pub missed_at: Option<DateTime<Utc>>,
}

impl Completion {
    /// Records a pending submission at the current clock time.
    #[must_use]
    pub fn submit(task_id: TaskId, user_id: UserId, clock: &impl Clock) -> Self {
        Self {
            id: CompletionId::new(),
            task_id,
            user_id,
            completed_at: clock.utc(),
            status: CompletionStatus::Pending,
            missed_at: None,
        }
    }

    /// Reconstructs a completion from persisted storage.
    #[must_use]
    pub const fn from_persisted(data: PersistedCompletionData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            user_id: data.user_id,
            completed_at: data.completed_at,
            status: data.status,
            missed_at: data.missed_at,
        }
    }

    /// Applies a review decision.
    #[must_use]
    pub const fn with_status(mut self, status: CompletionStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks the task as having expired before a review decision.
    #[must_use]
    pub const fn with_missed_at(mut self, missed_at: DateTime<Utc>) -> Self {
        self.missed_at = Some(missed_at);
        self
    }

    /// Returns the completion identifier.
    #[must_use]
    pub const fn id(&self) -> CompletionId {
        self.id
    }

    /// Returns the referenced task identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the submitting user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the submission timestamp.
    #[must_use]
    pub const fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Returns the review status.
    #[must_use]
    pub const fn status(&self) -> CompletionStatus {
        self.status
    }

    /// Returns the missed-before-review timestamp, if any.
    #[must_use]
    pub const fn missed_at(&self) -> Option<DateTime<Utc>> {
        self.missed_at
    }
}
