//! Wire models for the `PostgREST` tasks resource.

use crate::task::domain::{PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Row shape returned by `GET /tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Task priority.
    pub priority: TaskPriority,
    /// Workflow status.
    pub status: TaskStatus,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self::from_persisted(PersistedTaskData {
            id: TaskId::from_uuid(row.id),
            title: row.title,
            description: row.description,
            priority: row.priority,
            status: row.status,
            created_at: row.created_at,
        })
    }
}

/// Error body attached by the store to non-2xx responses. Only the
/// human-readable message is surfaced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Store-provided error message, when present.
    #[serde(default)]
    pub status_message: Option<String>,
}
