//! Unit tests for the board cache, drag reducer, grouping, mutation state
//! machine, and orchestration service.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
