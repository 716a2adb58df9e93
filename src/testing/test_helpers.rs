//! Shared test helpers for E2E and CLI integration tests
//!
//! This module contains reusable functions for test setup and naming
//! that can be used across different test suites.

use std::sync::atomic::{AtomicU64, Ordering};

// Generate unique test identifiers for parallel execution
static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique test identifier for parallel test execution
pub fn generate_test_id() -> u64 {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos() as u64;
    let counter = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    timestamp.wrapping_add(counter)
}

/// Build a database name scoped to one test, so parallel tests never
/// collide on users or collections.
pub fn test_database_name(prefix: &str) -> String {
    format!("{}_{}", prefix, generate_test_id())
}
