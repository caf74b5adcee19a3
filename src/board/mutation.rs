//! Finite state machine tracking one optimistic mutation.

use super::drag::StatusChange;
use std::fmt;
use thiserror::Error;

/// Lifecycle state of one optimistic mutation.
///
/// A mutation moves `Idle -> Optimistic` when the cache is rewritten ahead
/// of remote confirmation, then terminates in `Confirmed` or `RolledBack`.
/// There are no retries: a rolled-back mutation requires a new user gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationState {
    /// No local write has happened yet.
    Idle,
    /// The cache reflects the mutation; remote confirmation is pending.
    Optimistic,
    /// The remote store accepted the mutation. Terminal.
    Confirmed,
    /// The remote store rejected the mutation and the cache was restored.
    /// Terminal.
    RolledBack,
}

impl MutationState {
    /// Returns a diagnostic name for the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Optimistic => "optimistic",
            Self::Confirmed => "confirmed",
            Self::RolledBack => "rolled_back",
        }
    }

    /// Returns `true` when no further transition is allowed.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Confirmed | Self::RolledBack)
    }

    /// Returns `true` when the machine may move from `self` to `next`.
    #[must_use]
    pub const fn can_transition(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Optimistic)
                | (Self::Optimistic, Self::Confirmed)
                | (Self::Optimistic, Self::RolledBack)
        )
    }
}

impl fmt::Display for MutationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a transition the state machine forbids.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid mutation transition: {from} -> {to}")]
pub struct InvalidMutationTransition {
    /// State the mutation was in.
    pub from: MutationState,
    /// State the transition attempted to reach.
    pub to: MutationState,
}

/// One in-flight optimistic mutation: the intended status change plus its
/// lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    change: StatusChange,
    state: MutationState,
}

impl Mutation {
    /// Creates an idle mutation for the given status change.
    #[must_use]
    pub const fn new(change: StatusChange) -> Self {
        Self {
            change,
            state: MutationState::Idle,
        }
    }

    /// Returns the intended status change.
    #[must_use]
    pub const fn change(&self) -> StatusChange {
        self.change
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> MutationState {
        self.state
    }

    /// Marks the cache as optimistically rewritten.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMutationTransition`] unless the mutation is idle.
    pub const fn begin(&mut self) -> Result<(), InvalidMutationTransition> {
        self.transition(MutationState::Optimistic)
    }

    /// Records remote confirmation. Terminal.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMutationTransition`] unless the mutation is
    /// optimistic.
    pub const fn confirm(&mut self) -> Result<(), InvalidMutationTransition> {
        self.transition(MutationState::Confirmed)
    }

    /// Records remote rejection and cache restoration. Terminal.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMutationTransition`] unless the mutation is
    /// optimistic.
    pub const fn roll_back(&mut self) -> Result<(), InvalidMutationTransition> {
        self.transition(MutationState::RolledBack)
    }

    const fn transition(&mut self, next: MutationState) -> Result<(), InvalidMutationTransition> {
        if !self.state.can_transition(next) {
            return Err(InvalidMutationTransition {
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(())
    }
}
