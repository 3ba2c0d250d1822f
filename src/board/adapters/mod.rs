//! Adapter implementations for task board ports.

pub mod clock;
pub mod memory;
