//! Error types for the verifier.

use thiserror::Error;

/// Errors that can occur during verification.
///
/// A failed check is not an error; it lands in the
/// [`VerificationReport`](crate::VerificationReport). Errors mean the
/// verifier could not run at all.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// MongoDB connection or query error.
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),
}
