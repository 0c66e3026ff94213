//! Shared test helpers for in-memory repository integration tests.

use chrono::NaiveDate;
use taskbook::task::domain::{
    DueDate, PersistedTaskData, Task, TaskDomainError, TaskId, TaskName, TaskStatus,
};

/// Builds a task as it would come back from storage, freshness check
/// bypassed so aged due dates are accepted.
///
/// # Errors
///
/// Returns an error when `id` is not hyphenated UUID text or `name` is
/// blank.
pub fn persisted_task(
    id: &str,
    name: &str,
    due_date: NaiveDate,
) -> Result<Task, TaskDomainError> {
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::parse(id)?,
        name: TaskName::new(name)?,
        status: TaskStatus::NotCompleted,
        due_date: DueDate::from_persisted(due_date),
    }))
}

/// Asserts exactly `expected` tasks are stored.
///
/// # Errors
///
/// Returns an error when the stored count differs from `expected`.
pub fn ensure_task_count(tasks: &[Task], expected: usize) -> Result<(), eyre::Report> {
    eyre::ensure!(
        tasks.len() == expected,
        "expected {expected} stored tasks, found {}",
        tasks.len()
    );
    Ok(())
}
