//! Error types for the seeder.

use thiserror::Error;

/// Errors that can occur while seeding.
///
/// Every step fails fast: the first error aborts the remaining steps and
/// leaves partially created state in place. A duplicate `wizapp` user on a
/// re-run surfaces here as the server's command error.
#[derive(Error, Debug)]
pub enum SeedError {
    /// MongoDB connection, command, or write error.
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),
}
