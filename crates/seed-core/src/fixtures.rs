//! The fixed content the seeder writes.
//!
//! Everything here is a static embedded table, not configuration. The
//! sample documents are demo/test content, including the fake PII/PCI
//! markers used by security-scanning demos.

use bson::{doc, Document};
use chrono::{DateTime, Utc};

/// Default target database.
pub const DATABASE: &str = "wizknowledge";

/// Application credential created by the seeder.
///
/// A throwaway local-development credential. The plaintext password is part
/// of the fixture and doubles as a finding for security-scanning demos.
pub const APP_USERNAME: &str = "wizapp";
pub const APP_PASSWORD: &str = "password123";

/// The single role granted to the application credential, scoped to the
/// target database.
pub const APP_ROLE: &str = "readWrite";

/// Collections created by the seeder, in creation order.
pub const COLLECTIONS: [&str; 3] = ["knowledge_base", "queries", "test_data"];

/// The one collection that receives sample documents.
pub const SAMPLE_COLLECTION: &str = "test_data";

/// Number of sample documents inserted into [`SAMPLE_COLLECTION`].
pub const SAMPLE_DOCUMENT_COUNT: usize = 5;

/// Line printed to stdout after a successful seed.
pub const SUCCESS_MESSAGE: &str = "✅ WizKnowledge database initialized with sample data";

/// The five sample documents, in insertion order.
///
/// The three knowledge entries carry a `created_at` stamp taken from the
/// caller (insertion time); the two sensitive-data markers do not. Field
/// content is fixed and must not drift: the verifier and the tests compare
/// against it field-for-field.
pub fn sample_documents(created_at: DateTime<Utc>) -> Vec<Document> {
    let created_at = bson::DateTime::from_chrono(created_at);

    vec![
        doc! {
            "type": "security",
            "category": "vulnerability",
            "title": "SQL Injection Prevention",
            "content": "Always use parameterized queries to prevent SQL injection attacks.",
            "tags": ["security", "sql", "vulnerability"],
            "created_at": created_at,
        },
        doc! {
            "type": "security",
            "category": "authentication",
            "title": "Password Security",
            "content": "Use bcrypt or argon2 for password hashing, never store passwords in plain text.",
            "tags": ["security", "authentication", "passwords"],
            "created_at": created_at,
        },
        doc! {
            "type": "development",
            "category": "best-practices",
            "title": "Code Review Guidelines",
            "content": "All code should be reviewed by at least one other developer before merging.",
            "tags": ["development", "process", "quality"],
            "created_at": created_at,
        },
        doc! {
            "type": "sensitive",
            "data": "SSN: 123-45-6789",
            "classification": "PII",
            "warning": "This is test data for security scanning demos",
        },
        doc! {
            "type": "sensitive",
            "data": "Credit Card: 4111-1111-1111-1111",
            "classification": "PCI",
            "warning": "This is test data for security scanning demos",
        },
    ]
}
