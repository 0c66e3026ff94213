//! Lifecycle-status value object for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work on the task remains open. Assigned when no status is supplied
    /// at creation time.
    #[default]
    #[serde(rename = "NOT_COMPLETED")]
    NotCompleted,
    /// The task has been completed.
    #[serde(rename = "DONE")]
    Done,
}

impl TaskStatus {
    /// Returns the canonical status label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotCompleted => "NOT_COMPLETED",
            Self::Done => "DONE",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = TaskDomainError;

    /// Matching is case-sensitive against the canonical labels.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "NOT_COMPLETED" => Ok(Self::NotCompleted),
            "DONE" => Ok(Self::Done),
            _ => Err(TaskDomainError::UnknownTaskStatus(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
