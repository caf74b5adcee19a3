//! Task persistence for the board.
//!
//! Models the unit of work shown on the board and the three-operation
//! contract against the remote task store (ordered listing, insert, partial
//! update by id). The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
