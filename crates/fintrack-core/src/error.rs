//! Error types for fintrack-core
//!
//! The reporting engine surfaces only two failure classes: an entity that
//! does not belong to the requesting user, and a store call that failed.
//! Empty windows, inverted custom ranges and zero denominators are NOT
//! errors; they yield zero-valued aggregates by design.

use fintrack_store::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for caller-level failure mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportErrorCode {
    /// Category not found for the requesting user
    CategoryNotFound,
    /// Underlying store call failed
    StoreFailure,
}

impl std::fmt::Display for ReportErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportErrorCode::CategoryNotFound => write!(f, "CATEGORY_NOT_FOUND"),
            ReportErrorCode::StoreFailure => write!(f, "STORE_FAILURE"),
        }
    }
}

/// Main error type for fintrack-core
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Category not found: {id}")]
    CategoryNotFound { id: i64 },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ReportError {
    /// Get the error code
    pub fn code(&self) -> ReportErrorCode {
        match self {
            ReportError::CategoryNotFound { .. } => ReportErrorCode::CategoryNotFound,
            ReportError::Store(_) => ReportErrorCode::StoreFailure,
        }
    }
}

/// Result type with ReportError
pub type ReportResult<T> = Result<T, ReportError>;
