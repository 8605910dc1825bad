//! Core error types

use crate::types::SubjectId;
use thiserror::Error;

/// Errors raised by the core data model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Two entries from different subjects were ordered against each other
    ///
    /// Entries only have a defined order within one subject's history.
    #[error("cannot compare entries of subject {left} with entries of subject {right}")]
    CrossSubjectComparison {
        /// Subject of the left-hand entry
        left: SubjectId,
        /// Subject of the right-hand entry
        right: SubjectId,
    },
}

/// Result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
