//! Scoring, organization and lifecycle services for the task board.

pub mod board;
pub mod lifecycle;
pub mod organizer;
pub mod priority;

pub use board::{TaskBoardError, TaskBoardResult, TaskBoardService};
pub use lifecycle::{
    CategorizedTasks, Classification, LifecycleBucket, LifecycleConfig, LifecycleItem,
    PagedBucket, ParseLifecycleBucketError, categorize, categorize_with, classify,
};
pub use organizer::{
    DisplayConfig, Organizable, OrganizedTasks, ParseSortOrderError, ParseStatusFilterError,
    SortOrder, StatusFilter, TaskFilter, organize,
};
pub use priority::score;
