//! In-memory integration tests for task lifecycle operations.

use std::sync::Arc;

use super::helpers::ensure_task_count;
use chrono::{Days, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskbook::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskId, TaskStatus},
    services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService, UpdateTaskRequest},
};

type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_carry_domain_defaults(service: TestService) -> Result<(), eyre::Report> {
    let today = Utc::now().date_naive();
    service
        .create_task(CreateTaskRequest::new("タスク１"))
        .await?;
    service
        .create_task(CreateTaskRequest::new("タスク２"))
        .await?;

    let all = service.list_tasks().await?;
    ensure_task_count(&all, 2)?;
    for task in &all {
        eyre::ensure!(
            task.status() == TaskStatus::NotCompleted,
            "new task must start as NOT_COMPLETED"
        );
        eyre::ensure!(
            task.due_date().value() == today,
            "new task must fall due today"
        );
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lookup_returns_none_for_a_never_saved_identifier(service: TestService) {
    let found = service
        .find_task(TaskId::generate())
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updated_fields_survive_a_reload(service: TestService) -> Result<(), eyre::Report> {
    let created = service
        .create_task(CreateTaskRequest::new("タスク２"))
        .await?;
    let tomorrow = Utc::now()
        .date_naive()
        .checked_add_days(Days::new(1))
        .ok_or_else(|| eyre::eyre!("date arithmetic overflow"))?;

    service
        .update_task(
            UpdateTaskRequest::new(created.id())
                .with_status("DONE")
                .with_due_date(tomorrow),
        )
        .await?;

    let reloaded = service
        .find_task(created.id())
        .await?
        .ok_or_else(|| eyre::eyre!("updated task disappeared"))?;
    eyre::ensure!(
        reloaded.name().as_str() == "タスク２",
        "name must survive a status update"
    );
    eyre::ensure!(reloaded.status() == TaskStatus::Done, "status not updated");
    eyre::ensure!(
        reloaded.due_date().value() == tomorrow,
        "due date not updated"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removing_all_tasks_empties_the_collection(
    service: TestService,
) -> Result<(), eyre::Report> {
    let first = service
        .create_task(CreateTaskRequest::new("タスク１"))
        .await?;
    let second = service
        .create_task(CreateTaskRequest::new("タスク２"))
        .await?;

    service.remove_task(first.id()).await?;
    service.remove_task(second.id()).await?;
    ensure_task_count(&service.list_tasks().await?, 0)?;

    // Removing an already-removed id stays a no-op.
    service.remove_task(first.id()).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updating_a_missing_task_reports_not_found(service: TestService) {
    let result = service
        .update_task(UpdateTaskRequest::new(TaskId::generate()).with_name("renamed"))
        .await;

    let error = result.expect_err("update of a missing task must fail");
    assert!(matches!(error, TaskLifecycleError::NotFound(_)));
    assert_eq!(error.to_string(), "The task is not found.");
}
