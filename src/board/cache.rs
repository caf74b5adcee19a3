//! In-memory board cache with optimistic mutation and rollback.

use crate::task::domain::{Task, TaskId, TaskPatch};

/// Immutable, ordered copy of the task list at a point in time.
///
/// Snapshots are captured before an optimistic write and restore the cache
/// on rollback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    tasks: Vec<Task>,
}

impl BoardSnapshot {
    /// Creates a snapshot over an ordered task list.
    #[must_use]
    pub const fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Returns the ordered task list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the snapshot holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Consumes the snapshot, yielding the task list.
    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}

/// Token identifying one fetch attempt. A completed fetch is installed only
/// while its token is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchGeneration(u64);

/// Key-addressed cache of the last-fetched task list.
///
/// The cache is single-threaded by design: it lives on the UI's one logical
/// thread, every mutation runs to completion before the next event, and no
/// interior locking exists. The fetch generation guards against a slow,
/// superseded list response overwriting newer state.
#[derive(Debug, Default)]
pub struct BoardCache {
    tasks: Vec<Task>,
    stale: bool,
    fetch_generation: u64,
    revision: u64,
}

impl BoardCache {
    /// Creates an empty cache. The cache starts stale so the first read
    /// triggers a fetch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            stale: true,
            fetch_generation: 0,
            revision: 0,
        }
    }

    /// Returns an ordered copy of the cached task list.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.tasks.clone())
    }

    /// Returns `true` when the cache must be re-fetched before the next
    /// read is authoritative.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        self.stale
    }

    /// Returns the content revision. The revision changes whenever the
    /// cached list changes, so derived views can memoize on it.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Marks the cache stale and supersedes any in-flight fetch.
    pub const fn invalidate(&mut self) {
        self.stale = true;
        self.fetch_generation += 1;
    }

    /// Starts a fetch, superseding any earlier in-flight fetch, and returns
    /// the token under which the result may be installed.
    pub const fn begin_fetch(&mut self) -> FetchGeneration {
        self.fetch_generation += 1;
        FetchGeneration(self.fetch_generation)
    }

    /// Installs a fetched task list when `token` is still current. Returns
    /// `false` when the response was superseded and has been discarded.
    pub fn complete_fetch(&mut self, token: FetchGeneration, tasks: Vec<Task>) -> bool {
        if token.0 != self.fetch_generation {
            tracing::debug!(
                token = token.0,
                current = self.fetch_generation,
                "discarding superseded fetch response"
            );
            return false;
        }
        self.tasks = tasks;
        self.stale = false;
        self.revision += 1;
        true
    }

    /// Immediately rewrites the cached copy of the task matching `id` and
    /// returns the pre-mutation snapshot for later rollback. An unknown id
    /// leaves the cache untouched and returns `None`.
    pub fn apply_optimistic(&mut self, id: TaskId, patch: &TaskPatch) -> Option<BoardSnapshot> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        let previous = self.snapshot();
        if let Some(task) = self.tasks.get_mut(position) {
            task.apply(patch);
            self.revision += 1;
        }
        Some(previous)
    }

    /// Replaces the cache wholesale with a previously captured snapshot.
    pub fn rollback(&mut self, snapshot: BoardSnapshot) {
        self.tasks = snapshot.into_tasks();
        self.revision += 1;
    }
}
