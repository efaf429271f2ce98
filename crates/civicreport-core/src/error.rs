//! Error types module
//!
//! Unified `AppError` enum for failures that cross crate boundaries:
//! bad caller input, storage backend failures, report store failures.
//! Photo rejection is NOT an error; it is an expected outcome carried
//! by `ValidationResult` / the submission outcome types.

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Report store error: {0}")]
    ReportStore(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
