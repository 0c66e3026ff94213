//! Taskbook: task management domain core.
//!
//! This crate provides the domain model behind a task CRUD service: validated
//! value objects, the task aggregate composed from them, and the repository
//! port through which tasks are persisted and retrieved. HTTP routing,
//! request/response shaping, and server bootstrap live in the surrounding
//! application.
//!
//! # Architecture
//!
//! Taskbook follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task value objects, aggregate, repository port, and services

pub mod task;
