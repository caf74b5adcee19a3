//! Unit tests for the task domain and its adapters.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod memory_repository_tests;
