//! Task aggregate and related reward task types.

use super::{ParseTaskKindError, Points, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Kind of marketing action a task asks the user to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Follow an account on a social network.
    #[serde(alias = "social-follow")]
    SocialFollow,
    /// Like a social post.
    #[serde(alias = "social-like")]
    SocialLike,
    /// Repost or share a social post.
    #[serde(alias = "social-repost")]
    SocialRepost,
    /// Join a community channel.
    #[serde(alias = "channel-join")]
    ChannelJoin,
    /// Refer another user to the platform.
    Referral,
    /// Free-form task verified by an administrator.
    Custom,
}

impl TaskKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SocialFollow => "social_follow",
            Self::SocialLike => "social_like",
            Self::SocialRepost => "social_repost",
            Self::ChannelJoin => "channel_join",
            Self::Referral => "referral",
            Self::Custom => "custom",
        }
    }
}

impl TryFrom<&str> for TaskKind {
    type Error = ParseTaskKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "social_follow" => Ok(Self::SocialFollow),
            "social_like" => Ok(Self::SocialLike),
            "social_repost" => Ok(Self::SocialRepost),
            "channel_join" => Ok(Self::ChannelJoin),
            "referral" => Ok(Self::Referral),
            "custom" => Ok(Self::Custom),
            _ => Err(ParseTaskKindError(value.to_owned())),
        }
    }
}

/// Request for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: String,
    points: u32,
    kind: TaskKind,
    action_url: Option<String>,
    is_active: bool,
    expires_at: Option<DateTime<Utc>>,
    scheduled_deadline: Option<DateTime<Utc>>,
    is_time_sensitive: bool,
}

impl NewTask {
    /// Creates an active, open-ended task request.
    #[must_use]
    pub fn new(title: impl Into<String>, points: u32, kind: TaskKind) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            points,
            kind,
            action_url: None,
            is_active: true,
            expires_at: None,
            scheduled_deadline: None,
            is_time_sensitive: false,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the external action URL.
    #[must_use]
    pub fn with_action_url(mut self, url: impl Into<String>) -> Self {
        self.action_url = Some(url.into());
        self
    }

    /// Sets the hard expiry after which the task cannot be completed.
    #[must_use]
    pub const fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Sets the soft deadline used for urgency and priority.
    #[must_use]
    pub const fn with_scheduled_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.scheduled_deadline = Some(deadline);
        self
    }

    /// Marks the task as time-sensitive.
    #[must_use]
    pub const fn time_sensitive(mut self) -> Self {
        self.is_time_sensitive = true;
        self
    }

    /// Marks the task as inactive.
    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Assignable unit of work carrying a point reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    points: Points,
    kind: TaskKind,
    action_url: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    scheduled_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    is_time_sensitive: bool,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted point reward.
    pub points: Points,
    /// Persisted task kind.
    pub kind: TaskKind,
    /// Persisted action URL, if any.
    pub action_url: Option<String>,
    /// Persisted active flag.
    pub is_active: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted hard expiry, if any.
    pub expires_at: Option<DateTime<Utc>>,
    /// Persisted soft deadline, if any.
    pub scheduled_deadline: Option<DateTime<Utc>>,
    /// Persisted time-sensitivity flag.
    pub is_time_sensitive: bool,
}

impl Task {
    /// Creates a new task stamped with the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskTitle`] when the title is blank or
    /// [`TaskDomainError::InvalidPoints`] when the reward is zero.
    pub fn create(request: NewTask, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTaskTitle);
        }
        let points = Points::new(request.points)?;

        Ok(Self {
            id: TaskId::new(),
            title: title.to_owned(),
            description: request.description,
            points,
            kind: request.kind,
            action_url: request.action_url,
            is_active: request.is_active,
            created_at: clock.utc(),
            expires_at: request.expires_at,
            scheduled_deadline: request.scheduled_deadline,
            is_time_sensitive: request.is_time_sensitive,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            points: data.points,
            kind: data.kind,
            action_url: data.action_url,
            is_active: data.is_active,
            created_at: data.created_at,
            expires_at: data.expires_at,
            scheduled_deadline: data.scheduled_deadline,
            is_time_sensitive: data.is_time_sensitive,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the point reward.
    #[must_use]
    pub const fn points(&self) -> Points {
        self.points
    }

    /// Returns the task kind.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns the external action URL, if any.
    #[must_use]
    pub fn action_url(&self) -> Option<&str> {
        self.action_url.as_deref()
    }

    /// Returns whether the task is offered to users.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the hard expiry, if any.
    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Returns the soft deadline, if any.
    #[must_use]
    pub const fn scheduled_deadline(&self) -> Option<DateTime<Utc>> {
        self.scheduled_deadline
    }

    /// Returns whether the task is flagged as time-sensitive.
    #[must_use]
    pub const fn is_time_sensitive(&self) -> bool {
        self.is_time_sensitive
    }

    /// Returns whether the hard expiry lies strictly before `now`.
    ///
    /// Tasks without an expiry never expire.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }

    /// Returns whether a user may still complete the task at `now`.
    #[must_use]
    pub fn is_completable(&self, now: DateTime<Utc>) -> bool {
        self.is_active && !self.is_expired(now)
    }
}
