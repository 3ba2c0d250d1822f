//! Domain model for the reward task board.
//!
//! Tasks, completion records and the deadline helpers shared by the scoring
//! and categorization services. Nothing here performs I/O or reads the
//! system clock except through an injected [`mockable::Clock`].

mod completion;
mod error;
mod ids;
mod task;
mod urgency;

pub use completion::{Completion, CompletionStatus, PersistedCompletionData};
pub use error::{ParseCompletionStatusError, ParseTaskKindError, TaskDomainError};
pub use ids::{CompletionId, Points, TaskId, UserId};
pub use task::{NewTask, PersistedTaskData, Task, TaskKind};
pub use urgency::{DeadlineBand, Urgency};
