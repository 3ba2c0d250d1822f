//! In-memory adapters for the task board.

mod snapshot;

pub use snapshot::InMemorySnapshotRepository;
