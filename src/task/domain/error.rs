//! Error types for task domain validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing domain task values.
///
/// Each variant corresponds to one violated field invariant. The rendered
/// messages are consumed verbatim by callers and must stay stable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is not hyphenated UUID text.
    #[error("Task id must be UUIDv4 format.")]
    InvalidTaskId,

    /// The task name is empty after trimming.
    #[error("Task name must not be empty.")]
    EmptyTaskName,

    /// The status label matches no lifecycle state.
    #[error("TaskStatus({0}) is not defined.")]
    UnknownTaskStatus(String),

    /// The due date precedes the day it was supplied on.
    #[error("DueDate({0}) must be after today.")]
    StaleDueDate(NaiveDate),
}
