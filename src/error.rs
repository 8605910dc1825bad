//! Unified error types for Vestige.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to users.
//!
//! Unresolvable identifiers are not errors anywhere in Vestige; they come
//! back as `None` or as an empty history.

use thiserror::Error;
use vestige_core::CoreError;
use vestige_storage::StoreError;

/// All Vestige errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage backend failure
    #[error("storage error: {0}")]
    Storage(String),

    /// Rejected write (duplicate tag, timestamp going backwards, bad iteration)
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Entries of different subjects were ordered against each other
    #[error("incomparable entries: {0}")]
    Incomparable(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Vestige operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error came from the storage backend.
    ///
    /// Backend errors may succeed on retry; the engine itself never retries.
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage(_))
    }

    /// Check if this is a rejected write.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Error::ConstraintViolation(_))
    }

    /// Check if this is a cross-subject comparison.
    pub fn is_incomparable(&self) -> bool {
        matches!(self, Error::Incomparable(_))
    }
}

// Convert from storage errors
impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Backend(msg) => Error::Storage(msg),
            other @ (StoreError::DuplicateTag { .. }
            | StoreError::NonMonotonicTimestamp { .. }
            | StoreError::InvalidIteration { .. }) => Error::ConstraintViolation(other.to_string()),
        }
    }
}

// Convert from core errors
impl From<CoreError> for Error {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::CrossSubjectComparison { .. } => Error::Incomparable(e.to_string()),
        }
    }
}

// Convert from TOML parse errors
impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
