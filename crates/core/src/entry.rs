//! Version entries
//!
//! A [`VersionEntry`] is one immutable checkpoint in a subject's history.
//!
//! ## Equality and ordering
//!
//! Entries are identified by `(subject, iteration)` alone. Tag and creation
//! time do not take part in equality, hashing, or ordering.
//!
//! Ordering is only defined within one subject: `partial_cmp` returns `None`
//! for entries of different subjects, and [`VersionEntry::try_cmp`] reports
//! [`CoreError::CrossSubjectComparison`].

use crate::error::{CoreError, CoreResult};
use crate::types::{Iteration, SubjectId, Timestamp};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// One immutable checkpoint in a subject's version history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionEntry {
    subject: SubjectId,
    iteration: Iteration,
    created_at: Timestamp,
    tag: Option<String>,
}

impl VersionEntry {
    /// Create an untagged entry
    pub fn new(subject: SubjectId, iteration: Iteration, created_at: Timestamp) -> Self {
        Self {
            subject,
            iteration,
            created_at,
            tag: None,
        }
    }

    /// Attach a tag to this entry
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Subject owning this entry
    pub fn subject(&self) -> SubjectId {
        self.subject
    }

    /// Position within the subject's history
    pub fn iteration(&self) -> Iteration {
        self.iteration
    }

    /// Creation time
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Optional unique label
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Whether this is the first entry of its history
    pub fn is_initial(&self) -> bool {
        self.iteration == Iteration::FIRST
    }

    /// Whether both entries belong to the same subject
    pub fn same_subject(&self, other: &VersionEntry) -> bool {
        self.subject == other.subject
    }

    /// Order two entries of the same subject by iteration
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::CrossSubjectComparison`] if the entries belong to
    /// different subjects.
    pub fn try_cmp(&self, other: &VersionEntry) -> CoreResult<Ordering> {
        self.check_same_subject(other)?;
        Ok(self.iteration.cmp(&other.iteration))
    }

    /// Signed distance `self.iteration - other.iteration`
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::CrossSubjectComparison`] if the entries belong to
    /// different subjects.
    pub fn iteration_delta(&self, other: &VersionEntry) -> CoreResult<i128> {
        self.check_same_subject(other)?;
        Ok(i128::from(self.iteration.get()) - i128::from(other.iteration.get()))
    }

    fn check_same_subject(&self, other: &VersionEntry) -> CoreResult<()> {
        if self.same_subject(other) {
            Ok(())
        } else {
            Err(CoreError::CrossSubjectComparison {
                left: self.subject,
                right: other.subject,
            })
        }
    }
}

impl PartialEq for VersionEntry {
    fn eq(&self, other: &Self) -> bool {
        self.subject == other.subject && self.iteration == other.iteration
    }
}

impl Eq for VersionEntry {}

impl Hash for VersionEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.subject.hash(state);
        self.iteration.hash(state);
    }
}

// No Ord: cross-subject pairs have no order.
impl PartialOrd for VersionEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl std::fmt::Display for VersionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}@{} ({})", self.subject, self.iteration, tag),
            None => write!(f, "{}@{}", self.subject, self.iteration),
        }
    }
}
