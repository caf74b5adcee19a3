//! Domain model for board tasks.
//!
//! The task domain models the unit of work shown on the board: identity,
//! title and description, priority, workflow status, and the creation
//! timestamp used as the listing sort key. All infrastructure concerns stay
//! outside the domain boundary.

mod error;
mod ids;
mod priority;
mod status;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use priority::TaskPriority;
pub use status::TaskStatus;
pub use task::{NewTask, PersistedTaskData, Task, TaskPatch};
