//! Storage error types

use thiserror::Error;
use vestige_core::{Iteration, SubjectId, Timestamp};

/// Errors raised by a [`VersionStore`](crate::VersionStore) backend
///
/// Read paths only ever produce [`StoreError::Backend`]. The remaining
/// variants come from the in-memory write path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Backend failure (I/O, network, corruption)
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Tag already used by another entry of the same subject
    #[error("tag {tag:?} already names iteration {existing} of subject {subject}")]
    DuplicateTag {
        /// Subject being written
        subject: SubjectId,
        /// Rejected tag
        tag: String,
        /// Iteration already carrying the tag
        existing: Iteration,
    },

    /// Entry would be older than the entry before it
    #[error("created_at {attempted} precedes {previous} for subject {subject}")]
    NonMonotonicTimestamp {
        /// Subject being written
        subject: SubjectId,
        /// Creation time of the current latest entry
        previous: Timestamp,
        /// Rejected creation time
        attempted: Timestamp,
    },

    /// Iteration is zero, already used, or not above the current maximum
    #[error("invalid iteration {iteration} for subject {subject}: {reason}")]
    InvalidIteration {
        /// Subject being written
        subject: SubjectId,
        /// Rejected iteration
        iteration: Iteration,
        /// Why it was rejected
        reason: String,
    },
}

impl StoreError {
    /// Check if this error came from the backend rather than a rejected write
    pub fn is_backend(&self) -> bool {
        matches!(self, StoreError::Backend(_))
    }
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
