//! In-memory repository standing in for the remote store in tests.

use async_trait::async_trait;
use mockable::Clock;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{NewTask, PersistedTaskData, Task, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Behaves like the remote store at the port boundary: it assigns the
/// identifier and creation timestamp on insert (via the injected clock) and
/// lists rows ordered by creation timestamp, newest first. Unlike the HTTP
/// adapter it can tell a vanished id apart from success, so `update`
/// reports [`TaskRepositoryError::NotFound`].
pub struct InMemoryTaskRepository<C> {
    state: Arc<RwLock<Vec<Task>>>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryTaskRepository<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository assigning timestamps from `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Vec::new())),
            clock,
        }
    }

    /// Inserts a fully-specified row, bypassing store-side assignment.
    /// Test setup helper for seeding known ids and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Transport`] when the state lock is
    /// poisoned.
    pub fn seed(&self, data: PersistedTaskData) -> TaskRepositoryResult<TaskId> {
        let mut tasks = self
            .state
            .write()
            .map_err(TaskRepositoryError::transport)?;
        let id = data.id;
        tasks.push(Task::from_persisted(data));
        Ok(id)
    }
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self
            .state
            .read()
            .map_err(TaskRepositoryError::transport)?;
        let mut listing = tasks.clone();
        // Stable sort: rows sharing a timestamp keep insertion order.
        listing.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(listing)
    }

    async fn create(&self, draft: &NewTask) -> TaskRepositoryResult<()> {
        let task = Task::from_persisted(PersistedTaskData {
            id: TaskId::new(),
            title: draft.title().to_owned(),
            description: draft.description().map(ToOwned::to_owned),
            priority: draft.priority(),
            status: draft.status(),
            created_at: self.clock.utc(),
        });
        let mut tasks = self
            .state
            .write()
            .map_err(TaskRepositoryError::transport)?;
        tasks.push(task);
        Ok(())
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<()> {
        let mut tasks = self
            .state
            .write()
            .map_err(TaskRepositoryError::transport)?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.apply(patch);
        Ok(())
    }
}
