//! Tests for the in-memory repository's store-like behaviour.

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, PersistedTaskData, TaskId, TaskPatch, TaskPriority, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;

type TestRepository = InMemoryTaskRepository<DefaultClock>;

#[fixture]
fn repository() -> TestRepository {
    InMemoryTaskRepository::new(Arc::new(DefaultClock))
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn row(title: &str, status: TaskStatus, age_minutes: i64) -> PersistedTaskData {
    PersistedTaskData {
        id: TaskId::new(),
        title: title.to_owned(),
        description: None,
        priority: TaskPriority::default(),
        status,
        created_at: base_time() - Duration::minutes(age_minutes),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_orders_by_created_at_descending(repository: TestRepository) {
    repository
        .seed(row("oldest", TaskStatus::Done, 30))
        .expect("seed should succeed");
    repository
        .seed(row("newest", TaskStatus::Todo, 0))
        .expect("seed should succeed");
    repository
        .seed(row("middle", TaskStatus::InProgress, 10))
        .expect("seed should succeed");

    let listing = repository.list().await.expect("list should succeed");

    let titles: Vec<&str> = listing.iter().map(|task| task.title()).collect();
    assert_eq!(titles, vec!["newest", "middle", "oldest"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_identity_and_timestamp(repository: TestRepository) {
    let draft = NewTask::new("Sketch the board")
        .expect("valid draft")
        .with_priority(TaskPriority::High);

    repository
        .create(&draft)
        .await
        .expect("create should succeed");

    let listing = repository.list().await.expect("list should succeed");
    let created = listing.first().expect("one task");
    assert_eq!(created.title(), "Sketch the board");
    assert_eq!(created.priority(), TaskPriority::High);
    assert_eq!(created.status(), TaskStatus::Todo);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_patches_the_addressed_task(repository: TestRepository) {
    let id = repository
        .seed(row("move me", TaskStatus::Todo, 0))
        .expect("seed should succeed");
    repository
        .seed(row("leave me", TaskStatus::Todo, 5))
        .expect("seed should succeed");

    repository
        .update(id, &TaskPatch::status_change(TaskStatus::Done))
        .await
        .expect("update should succeed");

    let listing = repository.list().await.expect("list should succeed");
    let moved = listing
        .iter()
        .find(|task| task.id() == id)
        .expect("updated task present");
    assert_eq!(moved.status(), TaskStatus::Done);
    let untouched = listing
        .iter()
        .find(|task| task.id() != id)
        .expect("other task present");
    assert_eq!(untouched.status(), TaskStatus::Todo);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_unknown_id_reports_not_found(repository: TestRepository) {
    let missing = TaskId::new();

    let result = repository
        .update(missing, &TaskPatch::status_change(TaskStatus::Done))
        .await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == missing
    ));
}
