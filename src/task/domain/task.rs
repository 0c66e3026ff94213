//! Task aggregate root.

use super::{DueDate, TaskDomainError, TaskId, TaskName, TaskStatus};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Every field is a validated value object; the aggregate is never
/// observable in a partially constructed state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    status: TaskStatus,
    due_date: DueDate,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted display name.
    pub name: TaskName,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted due date, wrapped via [`DueDate::from_persisted`].
    pub due_date: DueDate,
}

/// Per-field replacement values for updating a task.
///
/// Fields left unset keep the aggregate's current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    name: Option<String>,
    status: Option<String>,
    due_date: Option<NaiveDate>,
}

impl TaskChanges {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a replacement status label.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets a replacement due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none() && self.due_date.is_none()
    }
}

impl Task {
    /// Creates a task from raw caller input.
    ///
    /// A fresh identifier is generated. `status` falls back to
    /// [`TaskStatus::NotCompleted`] and `due_date` to the clock's current
    /// day when absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when any supplied field fails validation;
    /// construction then aborts entirely.
    pub fn create(
        name: &str,
        status: Option<&str>,
        due_date: Option<NaiveDate>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let name = TaskName::new(name)?;
        let status = status
            .map(TaskStatus::try_from)
            .transpose()?
            .unwrap_or_default();
        let due_date = DueDate::new(due_date, clock)?;

        Ok(Self {
            id: TaskId::generate(),
            name,
            status,
            due_date,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            status: data.status,
            due_date: data.due_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DueDate {
        self.due_date
    }

    /// Applies a partial update; the identifier never changes.
    ///
    /// Each supplied field is revalidated exactly as on creation, the
    /// freshness check on a supplied due date included. All supplied fields
    /// are validated before any of them is written, so a rejected change set
    /// leaves the aggregate untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when any supplied field fails validation.
    pub fn update(
        &mut self,
        changes: &TaskChanges,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let name = changes
            .name
            .as_deref()
            .map(TaskName::new)
            .transpose()?;
        let status = changes
            .status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()?;
        let due_date = changes
            .due_date
            .map(|date| DueDate::new(Some(date), clock))
            .transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(due_date) = due_date {
            self.due_date = due_date;
        }
        Ok(())
    }
}
