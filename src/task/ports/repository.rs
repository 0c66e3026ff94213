//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Each call is independently atomic: callers observe a consistent snapshot
/// per call and concurrent writes to the same identifier serialize inside
/// the adapter.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Upserts a task by identifier: inserts when absent, fully replaces the
    /// stored record otherwise. Idempotent under repeated identical calls.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the storage layer
    /// fails.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the storage layer
    /// fails.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all stored tasks, in unspecified order.
    ///
    /// An empty collection is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the storage layer
    /// fails.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Deletes the record when present. Removing an absent identifier is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the storage layer
    /// fails.
    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
