//! Board state and orchestration.
//!
//! The board holds the last-fetched task list in an in-memory cache,
//! derives the three-column view from it, and reduces drop gestures to
//! status-change intents that are applied optimistically and confirmed
//! against the task repository, with rollback on failure.
//!
//! - Cache and snapshots: [`BoardCache`], [`BoardSnapshot`]
//! - Drop reducer: [`resolve_drop`]
//! - Column grouping: [`BoardColumns`], [`GroupedView`]
//! - Per-mutation state machine: [`Mutation`]
//! - Orchestration service: [`BoardService`]

mod cache;
mod drag;
mod grouping;
mod mutation;
mod service;

pub use cache::{BoardCache, BoardSnapshot, FetchGeneration};
pub use drag::{DropTarget, StatusChange, resolve_drop};
pub use grouping::{BoardColumns, GroupedView, group_by_status};
pub use mutation::{InvalidMutationTransition, Mutation, MutationState};
pub use service::{BoardError, BoardResult, BoardService, CreateTaskRequest, DragOutcome};

#[cfg(test)]
mod tests;
