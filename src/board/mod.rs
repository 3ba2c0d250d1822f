//! Reward task board.
//!
//! Derives, for one user at one instant, which lifecycle bucket each
//! assigned task belongs to and how flat task feeds are ordered. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Scoring, organization and categorization in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
