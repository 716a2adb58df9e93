//! Test infrastructure for seeding tests
//!
//! This module provides shared helpers for E2E and CLI integration tests:
//! MongoDB connections, per-test database names, cleanup of seeded state,
//! and running the wiz-seed binary as a subprocess.

pub mod cli;
pub mod mongodb;
pub mod test_helpers;

pub use mongodb::{connect_mongodb, drop_seeded_database, mongodb_uri};
pub use test_helpers::{generate_test_id, test_database_name};
