//! Task management for Taskbook.
//!
//! This module implements task creation from raw caller input, lookup by
//! identifier, whole-collection retrieval, per-field update, and removal.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
