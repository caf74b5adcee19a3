//! Orchestration service tying cache, reducer, and repository together.

use super::{
    cache::{BoardCache, BoardSnapshot},
    drag::{DropTarget, StatusChange, resolve_drop},
    grouping::{BoardColumns, GroupedView},
    mutation::{InvalidMutationTransition, Mutation},
};
use crate::task::{
    domain::{NewTask, TaskDomainError, TaskId, TaskPatch, TaskPriority, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task. Carries unvalidated input; the
/// service validates before any repository call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: TaskPriority,
    status: TaskStatus,
}

impl CreateTaskRequest {
    /// Creates a request with the given title, default priority, and
    /// default status.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: TaskPriority::default(),
            status: TaskStatus::default(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The mutation state machine was driven out of order.
    #[error(transparent)]
    Mutation(#[from] InvalidMutationTransition),
}

/// Result type for board service operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Outcome of a drop gesture.
#[derive(Debug)]
pub enum DragOutcome {
    /// The drop resolved to no status change; cache and store are both
    /// unchanged.
    NoOp,
    /// The remote store confirmed the status change.
    Confirmed(StatusChange),
    /// The remote store rejected the status change; the cache was restored
    /// to its pre-mutation snapshot. Non-fatal: the board stays
    /// interactive and a new gesture may re-attempt.
    RolledBack {
        /// The change that was attempted.
        change: StatusChange,
        /// The repository failure.
        error: TaskRepositoryError,
    },
}

/// Board orchestration service.
///
/// Owns the board cache and a memoized grouped view, and drives optimistic
/// mutations against the task repository. Runs on the UI's single logical
/// thread; only the repository round-trips suspend.
pub struct BoardService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
    cache: BoardCache,
    view: GroupedView,
}

impl<R> BoardService<R>
where
    R: TaskRepository,
{
    /// Creates a service over the given repository with an empty, stale
    /// cache.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            cache: BoardCache::new(),
            view: GroupedView::new(),
        }
    }

    /// Returns an ordered copy of the current cached task list.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.cache.snapshot()
    }

    /// Returns `true` when the cache must be re-fetched before the next
    /// read is authoritative.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        self.cache.is_stale()
    }

    /// Returns the grouped three-column view of the current snapshot,
    /// regrouped only when the cached content has changed.
    pub fn columns(&mut self) -> &BoardColumns {
        self.view.columns(&self.cache)
    }

    /// Fetches the task list from the repository and installs it, unless a
    /// newer fetch or an invalidation superseded this one while it was in
    /// flight.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Repository`] when the fetch fails; the cache
    /// keeps its previous content.
    pub async fn refresh(&mut self) -> BoardResult<()> {
        let token = self.cache.begin_fetch();
        let tasks = self.repository.list().await?;
        self.cache.complete_fetch(token, tasks);
        Ok(())
    }

    /// Returns the current snapshot, refreshing first when the cache is
    /// stale. This is the read path that reconciles with the store after
    /// an invalidation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Repository`] when a required refresh fails.
    pub async fn tasks(&mut self) -> BoardResult<BoardSnapshot> {
        if self.cache.is_stale() {
            self.refresh().await?;
        }
        Ok(self.cache.snapshot())
    }

    /// Validates and inserts a new task, then invalidates the cache so the
    /// next read observes the store-assigned id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] when validation fails — before any
    /// repository call — and [`BoardError::Repository`] when the insert is
    /// rejected; in both cases the cached state is untouched.
    pub async fn create_task(&mut self, request: CreateTaskRequest) -> BoardResult<()> {
        let mut draft = NewTask::new(request.title)?
            .with_priority(request.priority)
            .with_status(request.status);
        if let Some(description) = request.description {
            draft = draft.with_description(description);
        }

        self.repository.create(&draft).await?;
        self.cache.invalidate();
        Ok(())
    }

    /// Handles a drop gesture: resolves it against the current snapshot,
    /// applies the status change optimistically, and confirms it against
    /// the repository, rolling back on failure.
    ///
    /// Concurrent drops of the same task are not coordinated; the last
    /// write wins.
    ///
    /// # Errors
    ///
    /// Repository failures do not error here — they surface as
    /// [`DragOutcome::RolledBack`]. [`BoardError::Mutation`] signals a bug
    /// in the orchestration itself.
    pub async fn move_task(
        &mut self,
        active_task_id: TaskId,
        target: DropTarget,
    ) -> BoardResult<DragOutcome> {
        let snapshot = self.cache.snapshot();
        let Some(change) = resolve_drop(&snapshot, active_task_id, target) else {
            return Ok(DragOutcome::NoOp);
        };

        let mut mutation = Mutation::new(change);
        let patch = TaskPatch::status_change(change.new_status);
        let Some(previous) = self.cache.apply_optimistic(change.task_id, &patch) else {
            // resolve_drop already proved membership; a miss here means the
            // snapshot and cache diverged.
            return Ok(DragOutcome::NoOp);
        };
        mutation.begin()?;

        match self.repository.update(change.task_id, &patch).await {
            Ok(()) => {
                mutation.confirm()?;
                self.cache.invalidate();
                Ok(DragOutcome::Confirmed(change))
            }
            Err(error) => {
                mutation.roll_back()?;
                self.cache.rollback(previous);
                tracing::warn!(
                    task_id = %change.task_id,
                    new_status = %change.new_status,
                    %error,
                    "status update rejected; optimistic change rolled back"
                );
                Ok(DragOutcome::RolledBack { change, error })
            }
        }
    }
}
