//! Identifier value object for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a task record.
///
/// Only the hyphenated `8-4-4-4-12` textual layout is accepted when parsing
/// caller input; the canonical rendering is lower-case hyphenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a task identifier from caller-supplied text.
    ///
    /// Input hex digits may use either case; the wrapped value normalizes to
    /// lower case. Unhyphenated, braced, and URN spellings are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskId`] when the text does not
    /// match the hyphenated UUID layout.
    pub fn parse(raw: &str) -> Result<Self, TaskDomainError> {
        if !is_hyphenated_uuid(raw) {
            return Err(TaskDomainError::InvalidTaskId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidTaskId)
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::generate()
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checks for the `8-4-4-4-12` layout: hyphens at fixed offsets, hex digits
/// everywhere else.
fn is_hyphenated_uuid(raw: &str) -> bool {
    if raw.len() != 36 {
        return false;
    }
    raw.bytes().enumerate().all(|(position, byte)| match position {
        8 | 13 | 18 | 23 => byte == b'-',
        _ => byte.is_ascii_hexdigit(),
    })
}
