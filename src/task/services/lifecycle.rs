//! Service layer for task creation, lookup, update, and removal.

use crate::task::{
    domain::{Task, TaskChanges, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task from raw caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: String,
    status: Option<String>,
    due_date: Option<NaiveDate>,
}

impl CreateTaskRequest {
    /// Creates a request with the required display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: None,
            due_date: None,
        }
    }

    /// Sets an explicit status label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets an explicit due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for a per-field task update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    changes: TaskChanges,
}

impl UpdateTaskRequest {
    /// Creates an update request with no field changes yet.
    #[must_use]
    pub fn new(id: TaskId) -> Self {
        Self {
            id,
            changes: TaskChanges::new(),
        }
    }

    /// Sets a replacement display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.changes = self.changes.with_name(name);
        self
    }

    /// Sets a replacement status label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.changes = self.changes.with_status(status);
        self
    }

    /// Sets a replacement due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.changes = self.changes.with_due_date(due_date);
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// No task exists for the requested identifier.
    #[error("The task is not found.")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task from raw caller input and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when input validation fails or the
    /// repository rejects persistence.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let task = Task::create(
            &request.name,
            request.status.as_deref(),
            request.due_date,
            &*self.clock,
        )?;
        self.repository.save(&task).await?;
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task exists for the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_task(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Retrieves all stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_all().await?)
    }

    /// Applies a per-field update to an existing task and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task exists for the
    /// identifier, [`TaskLifecycleError::Domain`] when a supplied field fails
    /// validation, or [`TaskLifecycleError::Repository`] when persistence
    /// fails.
    pub async fn update_task(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let mut task = self
            .repository
            .find_by_id(request.id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(request.id))?;
        task.update(&request.changes, &*self.clock)?;
        self.repository.save(&task).await?;
        Ok(task)
    }

    /// Removes a task by identifier. Removing an absent identifier succeeds
    /// without effect.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn remove_task(&self, id: TaskId) -> TaskLifecycleResult<()> {
        Ok(self.repository.remove(id).await?)
    }
}
