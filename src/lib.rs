//! Rewardboard: task lifecycle organizer for a rewards platform.
//!
//! Users earn points by completing marketing tasks. This crate decides, on
//! every view, which tasks are open, awaiting review, completed or missed,
//! and how task feeds are prioritized.
//!
//! # Architecture
//!
//! Rewardboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Task and completion model, priority scoring, display
//!   organization and lifecycle categorization

pub mod board;
