//! Column grouping: partitioning a snapshot into the three board columns.

use super::cache::{BoardCache, BoardSnapshot};
use crate::task::domain::{Task, TaskStatus};

/// The three board columns, each holding its tasks in snapshot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardColumns {
    todo: Vec<Task>,
    in_progress: Vec<Task>,
    done: Vec<Task>,
}

impl BoardColumns {
    /// Returns the tasks of the column for `status`, in snapshot order.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Returns the TODO column.
    #[must_use]
    pub fn todo(&self) -> &[Task] {
        &self.todo
    }

    /// Returns the IN_PROGRESS column.
    #[must_use]
    pub fn in_progress(&self) -> &[Task] {
        &self.in_progress
    }

    /// Returns the DONE column.
    #[must_use]
    pub fn done(&self) -> &[Task] {
        &self.done
    }
}

/// Partitions a snapshot into the three columns, preserving the snapshot's
/// relative order within each partition.
#[must_use]
pub fn group_by_status(snapshot: &BoardSnapshot) -> BoardColumns {
    let mut columns = BoardColumns::default();
    for task in snapshot.tasks() {
        match task.status() {
            TaskStatus::Todo => columns.todo.push(task.clone()),
            TaskStatus::InProgress => columns.in_progress.push(task.clone()),
            TaskStatus::Done => columns.done.push(task.clone()),
        }
    }
    columns
}

/// Memoized grouped view over a [`BoardCache`].
///
/// Regrouping happens only when the cache revision changes, mirroring
/// recompute-on-identity memoization.
#[derive(Debug, Default)]
pub struct GroupedView {
    revision: Option<u64>,
    columns: BoardColumns,
}

impl GroupedView {
    /// Creates a view with no cached grouping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            revision: None,
            columns: BoardColumns {
                todo: Vec::new(),
                in_progress: Vec::new(),
                done: Vec::new(),
            },
        }
    }

    /// Returns the grouped columns for the cache's current content,
    /// regrouping only when the content revision has changed.
    pub fn columns(&mut self, cache: &BoardCache) -> &BoardColumns {
        let current = cache.revision();
        if self.revision != Some(current) {
            self.columns = group_by_status(&cache.snapshot());
            self.revision = Some(current);
        }
        &self.columns
    }
}
