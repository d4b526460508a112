//! Error types for fintrack-store

use thiserror::Error;

/// Storage error type
///
/// A failed store call aborts the whole report composition; the reporting
/// core performs no retries and no partial-result suppression.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage backend error: {message}")]
    Backend { message: String },

    #[error("Storage backend unavailable")]
    Unavailable,
}

/// Result type with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
