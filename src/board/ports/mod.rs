//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod snapshot;

pub use snapshot::{TaskSnapshotError, TaskSnapshotRepository, TaskSnapshotResult};
