//! Subject-scoped history access.
//!
//! [`Versions`] is the history of one subject. Every method takes anything
//! convertible into an [`Identifier`]: an iteration number, a tag, a
//! timestamp, a named query, or an entry.
//!
//! ```
//! use vestige::prelude::*;
//!
//! let db = Vestige::ephemeral();
//! let doc = SubjectId::new();
//! db.record_at(doc, None, Timestamp::from_secs(10))?;
//! db.record_at(doc, Some("draft"), Timestamp::from_secs(20))?;
//!
//! let versions = db.versions(doc);
//! assert_eq!(versions.iteration_at("draft")?.map(|i| i.get()), Some(2));
//! assert_eq!(versions.iteration_at(2.9)?.map(|i| i.get()), Some(2));
//! assert!(versions.at("missing")?.is_none());
//! # Ok::<(), vestige::Error>(())
//! ```

use crate::error::Result;
use std::sync::Arc;
use vestige_core::{Identifier, Iteration, NamedQuery, SubjectId, VersionEntry};
use vestige_engine::HistoryEngine;
use vestige_storage::InMemoryStore;

/// Version history of one subject.
///
/// Access via [`Vestige::versions`](crate::Vestige::versions).
pub struct Versions<'a> {
    engine: &'a HistoryEngine<Arc<InMemoryStore>>,
    subject: SubjectId,
}

impl<'a> Versions<'a> {
    pub(crate) fn new(engine: &'a HistoryEngine<Arc<InMemoryStore>>, subject: SubjectId) -> Self {
        Self { engine, subject }
    }

    /// Subject this history belongs to.
    pub fn subject(&self) -> SubjectId {
        self.subject
    }

    /// The version named by `value`, if any.
    pub fn at(&self, value: impl Into<Identifier>) -> Result<Option<VersionEntry>> {
        Ok(self.engine.resolve_entry(self.subject, value)?)
    }

    /// The iteration named by `value`, if any.
    ///
    /// Numbers resolve without a lookup, and times before the first version
    /// resolve to iteration 1.
    pub fn iteration_at(&self, value: impl Into<Identifier>) -> Result<Option<Iteration>> {
        Ok(self.engine.resolve_iteration(self.subject, value)?)
    }

    /// Versions from `from` to `to`, inclusive, in that direction.
    pub fn between(
        &self,
        from: impl Into<Identifier>,
        to: impl Into<Identifier>,
    ) -> Result<Vec<VersionEntry>> {
        Ok(self.engine.between(self.subject, from, to)?)
    }

    /// Versions created before the one named by `value`.
    pub fn before(&self, value: impl Into<Identifier>) -> Result<Vec<VersionEntry>> {
        Ok(self.engine.before(self.subject, value)?)
    }

    /// Versions created after the one named by `value`.
    pub fn after(&self, value: impl Into<Identifier>) -> Result<Vec<VersionEntry>> {
        Ok(self.engine.after(self.subject, value)?)
    }

    /// Every version, oldest first.
    pub fn all(&self) -> Result<Vec<VersionEntry>> {
        Ok(self.engine.all(self.subject)?)
    }

    /// Oldest stored version.
    pub fn first(&self) -> Result<Option<VersionEntry>> {
        self.at(NamedQuery::First)
    }

    /// Newest stored version.
    pub fn last(&self) -> Result<Option<VersionEntry>> {
        self.at(NamedQuery::Last)
    }

    /// Number of stored versions.
    pub fn count(&self) -> usize {
        self.engine.store().entry_count(self.subject)
    }

    /// Whether no versions are stored.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
