//! Pure reducer mapping a drop gesture to a status-change decision.

use super::cache::BoardSnapshot;
use crate::task::domain::{TaskId, TaskStatus};

/// Where a dragged task was dropped: onto another task's card, or onto a
/// column's own area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Dropped onto the card of another task; the target column is that
    /// task's column.
    Task(TaskId),
    /// Dropped onto a column directly.
    Column(TaskStatus),
}

/// Intent to move one task to a new workflow status. Column membership is
/// the only thing that changes; no in-column ordering is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    /// The task to move.
    pub task_id: TaskId,
    /// The status it moves to.
    pub new_status: TaskStatus,
}

/// Resolves a drop gesture against the current snapshot.
///
/// Returns `None` for every no-op case: the active task is absent from the
/// snapshot (stale drag state), the drop target refers to a task that has
/// vanished, or the drop lands in the task's current column (idempotent).
#[must_use]
pub fn resolve_drop(
    snapshot: &BoardSnapshot,
    active_task_id: TaskId,
    target: DropTarget,
) -> Option<StatusChange> {
    let Some(active_task) = snapshot.find(active_task_id) else {
        tracing::debug!(%active_task_id, "drop ignored: active task not in snapshot");
        return None;
    };

    let new_status = match target {
        DropTarget::Column(status) => status,
        DropTarget::Task(target_id) => {
            let Some(target_task) = snapshot.find(target_id) else {
                tracing::debug!(%target_id, "drop ignored: target task not in snapshot");
                return None;
            };
            target_task.status()
        }
    };

    if active_task.status() == new_status {
        tracing::debug!(%active_task_id, status = %new_status, "drop within the same column; no-op");
        return None;
    }

    Some(StatusChange {
        task_id: active_task_id,
        new_status,
    })
}
