//! Document comparison logic.

use bson::{doc, Bson, Document};

use crate::report::FieldMismatch;

/// Fields that identify a sample document, tried in order. Knowledge
/// entries are unique by title, sensitive markers by their data string.
const IDENTITY_FIELDS: [&str; 2] = ["title", "data"];

/// Pick an identity label and a lookup filter for an expected document.
pub fn identity_filter(expected: &Document) -> (String, Document) {
    for key in IDENTITY_FIELDS {
        if let Ok(value) = expected.get_str(key) {
            return (value.to_string(), doc! { key: value });
        }
    }

    // Fixtures always carry an identity field; match the whole document
    // if one ever does not.
    ("<unidentified>".to_string(), expected.clone())
}

/// Compare an expected fixture document with a stored document.
///
/// `_id` is server-assigned and skipped. Datetime fields are stamped at
/// insertion time, so for those only the type is checked; every other
/// field must match exactly, and fields present on only one side are
/// mismatches too.
pub fn compare_documents(expected: &Document, actual: &Document) -> Vec<FieldMismatch> {
    let mut mismatches = Vec::new();

    for (field, expected_value) in expected {
        match actual.get(field) {
            Some(actual_value) => {
                let matched = match expected_value {
                    Bson::DateTime(_) => matches!(actual_value, Bson::DateTime(_)),
                    _ => expected_value == actual_value,
                };
                if !matched {
                    mismatches.push(FieldMismatch {
                        field: field.clone(),
                        expected: expected_value.to_string(),
                        actual: actual_value.to_string(),
                    });
                }
            }
            None => {
                mismatches.push(FieldMismatch {
                    field: field.clone(),
                    expected: expected_value.to_string(),
                    actual: "MISSING".to_string(),
                });
            }
        }
    }

    for (field, actual_value) in actual {
        if field == "_id" || expected.contains_key(field.as_str()) {
            continue;
        }
        mismatches.push(FieldMismatch {
            field: field.clone(),
            expected: "ABSENT".to_string(),
            actual: actual_value.to_string(),
        });
    }

    mismatches
}
