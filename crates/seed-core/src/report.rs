//! Seed run report types.

use std::time::Duration;

/// Outcome of a seed run.
///
/// A run that returns a report at all has succeeded; the seeder fails fast
/// on the first error. The counters exist so callers and tests can assert
/// what actually happened, and so dry-run output shows what would have.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    /// Whether the application user was created.
    pub user_created: bool,
    /// Names of the collections created, in creation order.
    pub collections_created: Vec<String>,
    /// Number of sample documents inserted.
    pub documents_inserted: u64,
    /// Whether this was a dry run (nothing written).
    pub dry_run: bool,
    /// Total seeding time.
    pub total_duration: Duration,
}

impl SeedReport {
    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.dry_run {
            format!(
                "Dry run: would create 1 user, {} collections, and insert {} documents",
                self.collections_created.len(),
                self.documents_inserted
            )
        } else {
            format!(
                "Seeded 1 user, {} collections, {} documents in {:?}",
                self.collections_created.len(),
                self.documents_inserted,
                self.total_duration
            )
        }
    }
}
