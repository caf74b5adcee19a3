//! Behavioural integration tests for the board flow over the in-memory
//! store adapter.
//!
//! These tests exercise the public crate surface in realistic board
//! sessions: initial load, drag-and-drop across columns with optimistic
//! confirmation, creation with re-fetch, and rollback when the store
//! rejects an update.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use deskboard::board::{BoardService, CreateTaskRequest, DragOutcome, DropTarget};
use deskboard::task::adapters::memory::InMemoryTaskRepository;
use deskboard::task::domain::{
    NewTask, PersistedTaskData, Task, TaskId, TaskPatch, TaskPriority, TaskStatus,
};
use deskboard::task::ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
use mockable::DefaultClock;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::runtime::Runtime;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

fn seeded_repository() -> (InMemoryTaskRepository<DefaultClock>, TaskId, TaskId) {
    let repository = InMemoryTaskRepository::new(Arc::new(DefaultClock));
    let base = Utc
        .with_ymd_and_hms(2026, 8, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");

    let todo_id = TaskId::new();
    repository
        .seed(PersistedTaskData {
            id: todo_id,
            title: "Wire the drag sensors".to_owned(),
            description: Some("Pointer and keyboard".to_owned()),
            priority: TaskPriority::High,
            status: TaskStatus::Todo,
            created_at: base,
        })
        .expect("seed should succeed");

    let done_id = TaskId::new();
    repository
        .seed(PersistedTaskData {
            id: done_id,
            title: "Scaffold the layout".to_owned(),
            description: None,
            priority: TaskPriority::Medium,
            status: TaskStatus::Done,
            created_at: base - Duration::hours(1),
        })
        .expect("seed should succeed");

    (repository, todo_id, done_id)
}

/// Repository decorator whose `update` can be switched to fail, standing in
/// for a store that rejects writes mid-session.
struct RejectingUpdates<R> {
    inner: R,
    fail_updates: AtomicBool,
}

impl<R> RejectingUpdates<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            fail_updates: AtomicBool::new(false),
        }
    }

    fn fail_next_updates(&self) {
        self.fail_updates.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl<R> TaskRepository for RejectingUpdates<R>
where
    R: TaskRepository,
{
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.inner.list().await
    }

    async fn create(&self, draft: &NewTask) -> TaskRepositoryResult<()> {
        self.inner.create(draft).await
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<()> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(TaskRepositoryError::Transport(
                "store rejected the update".to_owned(),
            ));
        }
        self.inner.update(id, patch).await
    }
}

// ============================================================================
// Initial Load and Grouping
// ============================================================================

#[test]
fn initial_load_groups_tasks_into_columns() {
    let rt = test_runtime();
    let (repository, _, _) = seeded_repository();
    let mut service = BoardService::new(Arc::new(repository));

    rt.block_on(service.refresh()).expect("refresh");

    let columns = service.columns();
    assert_eq!(columns.todo().len(), 1);
    assert!(columns.in_progress().is_empty());
    assert_eq!(columns.done().len(), 1);
    let first_todo = columns.todo().first().expect("todo card");
    assert_eq!(first_todo.title(), "Wire the drag sensors");
}

// ============================================================================
// Drag Across Columns
// ============================================================================

#[test]
fn drag_across_columns_confirms_and_reconciles() {
    let rt = test_runtime();
    let (repository, todo_id, _) = seeded_repository();
    let mut service = BoardService::new(Arc::new(repository.clone()));
    rt.block_on(service.refresh()).expect("refresh");

    let outcome = rt
        .block_on(service.move_task(todo_id, DropTarget::Column(TaskStatus::InProgress)))
        .expect("move");
    assert!(matches!(outcome, DragOutcome::Confirmed(_)));

    // The optimistic write is visible before any re-fetch.
    let optimistic = service.snapshot();
    let status = optimistic.find(todo_id).expect("task cached").status();
    assert_eq!(status, TaskStatus::InProgress);

    // The confirmed state survives reconciliation with the store.
    let reconciled = rt.block_on(service.tasks()).expect("re-read");
    let reconciled_status = reconciled.find(todo_id).expect("task listed").status();
    assert_eq!(reconciled_status, TaskStatus::InProgress);
}

#[test]
fn drag_onto_a_done_card_moves_into_done() {
    let rt = test_runtime();
    let (repository, todo_id, done_id) = seeded_repository();
    let mut service = BoardService::new(Arc::new(repository));
    rt.block_on(service.refresh()).expect("refresh");

    let outcome = rt
        .block_on(service.move_task(todo_id, DropTarget::Task(done_id)))
        .expect("move");

    assert!(
        matches!(outcome, DragOutcome::Confirmed(change) if change.new_status == TaskStatus::Done)
    );
    let columns = service.columns();
    assert!(columns.todo().is_empty());
    assert_eq!(columns.done().len(), 2);
}

// ============================================================================
// Rollback
// ============================================================================

#[test]
fn rejected_drag_restores_the_board() {
    let rt = test_runtime();
    let (repository, todo_id, _) = seeded_repository();
    let rejecting = Arc::new(RejectingUpdates::new(repository));
    let mut service = BoardService::new(Arc::clone(&rejecting));
    rt.block_on(service.refresh()).expect("refresh");
    let before = service.snapshot();

    rejecting.fail_next_updates();
    let outcome = rt
        .block_on(service.move_task(todo_id, DropTarget::Column(TaskStatus::Done)))
        .expect("move");

    assert!(matches!(outcome, DragOutcome::RolledBack { .. }));
    assert_eq!(service.snapshot(), before);
    // The board stays interactive: a later gesture can still succeed.
    let columns = service.columns();
    assert_eq!(columns.todo().len(), 1);
}

// ============================================================================
// Creation
// ============================================================================

#[test]
fn created_task_shows_up_after_reconciliation() {
    let rt = test_runtime();
    let (repository, _, _) = seeded_repository();
    let mut service = BoardService::new(Arc::new(repository));
    rt.block_on(service.refresh()).expect("refresh");

    rt.block_on(
        service.create_task(
            CreateTaskRequest::new("Polish the empty-column copy")
                .with_priority(TaskPriority::Low),
        ),
    )
    .expect("create");

    let snapshot = rt.block_on(service.tasks()).expect("re-read");
    assert_eq!(snapshot.len(), 3);
    assert!(
        snapshot
            .tasks()
            .iter()
            .any(|task| task.title() == "Polish the empty-column copy")
    );
}
