//! Deskboard: headless core of a three-column kanban task board.
//!
//! Tasks live in a remote `PostgREST`-style store and move between three
//! fixed workflow columns. This crate provides everything below the
//! presentation layer: the typed repository client, the optimistic board
//! cache with snapshot rollback, the pure drag reducer, and the
//! orchestration service.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the remote store
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task domain, repository port, and store adapters
//! - [`board`]: Board cache, column grouping, drag reducer, and the
//!   optimistic update orchestrator

pub mod board;
pub mod task;
