//! Due-date value object for the task domain.

use super::TaskDomainError;
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar day a task is due, with no time component.
///
/// A caller-supplied due date must not precede the day it is supplied on;
/// dates rehydrated from storage skip that check because they may
/// legitimately have aged into the past.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Creates a due date from optional caller input.
    ///
    /// Absent input falls back to [`DueDate::default_for`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::StaleDueDate`] when the supplied date lies
    /// before the clock's current day.
    pub fn new(value: Option<NaiveDate>, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        match value {
            Some(date) if date < today(clock) => Err(TaskDomainError::StaleDueDate(date)),
            Some(date) => Ok(Self(date)),
            None => Ok(Self::default_for(clock)),
        }
    }

    /// Creates a due date equal to the clock's current day.
    #[must_use]
    pub fn default_for(clock: &impl Clock) -> Self {
        Self(today(clock))
    }

    /// Wraps a stored date without the freshness check.
    #[must_use]
    pub const fn from_persisted(value: NaiveDate) -> Self {
        Self(value)
    }

    /// Returns the wrapped calendar date.
    #[must_use]
    pub const fn value(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn today(clock: &impl Clock) -> NaiveDate {
    clock.utc().date_naive()
}
