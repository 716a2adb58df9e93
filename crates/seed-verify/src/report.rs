//! Verification report types.

use std::time::Duration;

/// Information about a field mismatch.
#[derive(Debug, Clone)]
pub struct FieldMismatch {
    /// Field name.
    pub field: String,
    /// Expected value.
    pub expected: String,
    /// Actual value.
    pub actual: String,
}

/// Information about a mismatched document.
#[derive(Debug, Clone)]
pub struct DocumentMismatch {
    /// Identity of the document (its title or data string).
    pub identity: String,
    /// Field mismatches.
    pub field_mismatches: Vec<FieldMismatch>,
}

/// Information about a collection with the wrong document count.
#[derive(Debug, Clone)]
pub struct CollectionCountMismatch {
    /// Collection name.
    pub collection: String,
    /// Expected document count.
    pub expected: u64,
    /// Actual document count.
    pub actual: u64,
}

/// Verification report.
#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    /// Total number of sample documents expected.
    pub expected: u64,
    /// Number of sample documents found.
    pub found: u64,
    /// Number of sample documents that matched exactly.
    pub matched: u64,
    /// Number of sample documents missing.
    pub missing: u64,
    /// Number of sample documents with mismatched fields.
    pub mismatched: u64,
    /// Expected collections that do not exist.
    pub missing_collections: Vec<String>,
    /// Collections that exist but were never seeded.
    pub unexpected_collections: Vec<String>,
    /// Collections holding the wrong number of documents.
    pub count_mismatches: Vec<CollectionCountMismatch>,
    /// Identities of missing sample documents.
    pub missing_documents: Vec<String>,
    /// Details of mismatched sample documents.
    pub mismatched_documents: Vec<DocumentMismatch>,
    /// Total verification time.
    pub total_duration: Duration,
}

impl VerificationReport {
    /// Check if verification passed.
    pub fn is_success(&self) -> bool {
        self.missing == 0
            && self.mismatched == 0
            && self.missing_collections.is_empty()
            && self.unexpected_collections.is_empty()
            && self.count_mismatches.is_empty()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_success() {
            format!(
                "Verification PASSED: {}/{} documents matched in {:?}",
                self.matched, self.expected, self.total_duration
            )
        } else {
            format!(
                "Verification FAILED: {} missing, {} mismatched out of {} documents; {} collection problems",
                self.missing,
                self.mismatched,
                self.expected,
                self.missing_collections.len()
                    + self.unexpected_collections.len()
                    + self.count_mismatches.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_success() {
        let report = VerificationReport {
            expected: 5,
            found: 5,
            matched: 5,
            ..Default::default()
        };

        assert!(report.is_success());
    }

    #[test]
    fn test_report_failure_missing() {
        let report = VerificationReport {
            expected: 5,
            found: 4,
            matched: 4,
            missing: 1,
            missing_documents: vec!["Password Security".to_string()],
            ..Default::default()
        };

        assert!(!report.is_success());
    }

    #[test]
    fn test_report_failure_missing_collection() {
        let report = VerificationReport {
            expected: 5,
            found: 5,
            matched: 5,
            missing_collections: vec!["queries".to_string()],
            ..Default::default()
        };

        assert!(!report.is_success());
    }

    #[test]
    fn test_report_failure_count_mismatch() {
        let report = VerificationReport {
            expected: 5,
            found: 5,
            matched: 5,
            count_mismatches: vec![CollectionCountMismatch {
                collection: "test_data".to_string(),
                expected: 5,
                actual: 7,
            }],
            ..Default::default()
        };

        assert!(!report.is_success());
    }

    #[test]
    fn test_report_summary() {
        let report = VerificationReport {
            expected: 5,
            found: 5,
            matched: 5,
            total_duration: Duration::from_secs(1),
            ..Default::default()
        };

        let summary = report.summary();
        assert!(summary.contains("PASSED"));
        assert!(summary.contains("5/5"));
    }
}
