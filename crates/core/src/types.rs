//! Core types for version histories
//!
//! This module defines the scalar types used throughout the system:
//! - [`SubjectId`]: Unique identifier for a versioned subject
//! - [`Iteration`]: Position of an entry within a subject's history
//! - [`Timestamp`]: Creation time of an entry, in microseconds

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a subject (the entity owning a version history)
///
/// SubjectId scopes every store query. Two entries with the same iteration
/// but different subjects are unrelated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubjectId(Uuid);

impl SubjectId {
    /// Create a new random SubjectId using UUID v4
    ///
    /// # Examples
    ///
    /// ```
    /// use vestige_core::SubjectId;
    ///
    /// let a = SubjectId::new();
    /// let b = SubjectId::new();
    /// assert_ne!(a, b);
    /// ```
    pub fn new() -> Self {
        SubjectId(Uuid::new_v4())
    }

    /// Create SubjectId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        SubjectId(uuid)
    }

    /// Create SubjectId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        SubjectId(Uuid::from_bytes(bytes))
    }

    /// Get raw bytes representation
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for SubjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a version entry within its subject's history
///
/// Iterations are assigned in creation order starting at 1. The value 0
/// never names a stored entry; it only appears as the saturated floor of a
/// negative numeric identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Iteration(u64);

impl Iteration {
    /// Iteration of the first entry in every history
    pub const FIRST: Iteration = Iteration(1);

    /// Largest representable iteration
    pub const MAX: Iteration = Iteration(u64::MAX);

    /// Wrap a raw iteration number
    pub const fn new(value: u64) -> Self {
        Iteration(value)
    }

    /// Raw iteration number
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The iteration that follows this one, or `None` on overflow
    pub fn next(&self) -> Option<Iteration> {
        self.0.checked_add(1).map(Iteration)
    }
}

impl From<u64> for Iteration {
    fn from(value: u64) -> Self {
        Iteration(value)
    }
}

impl From<Iteration> for u64 {
    fn from(iteration: Iteration) -> Self {
        iteration.0
    }
}

impl std::fmt::Display for Iteration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Creation time of a version entry (microseconds since Unix epoch)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Unix epoch
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Current wall-clock time
    ///
    /// Times before the Unix epoch clamp to [`Timestamp::EPOCH`].
    pub fn now() -> Self {
        Timestamp::from(Utc::now())
    }

    /// Create from microseconds since Unix epoch
    pub const fn from_micros(micros: u64) -> Self {
        Timestamp(micros)
    }

    /// Create from whole seconds since Unix epoch
    pub const fn from_secs(secs: u64) -> Self {
        Timestamp(secs.saturating_mul(1_000_000))
    }

    /// Microseconds since Unix epoch
    pub const fn as_micros(&self) -> u64 {
        self.0
    }

    /// Convert to a chrono UTC datetime
    ///
    /// Returns `None` if the value is outside chrono's representable range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let micros = i64::try_from(self.0).ok()?;
        DateTime::from_timestamp_micros(micros)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp(u64::try_from(value.timestamp_micros()).unwrap_or(0))
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "{}us", self.0),
        }
    }
}
