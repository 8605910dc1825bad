//! History engine
//!
//! [`HistoryEngine`] bundles a store with the engine configuration and
//! exposes the full query surface:
//!
//! | Operation | Returns |
//! |-----------|---------|
//! | `resolve_entry(subject, id)` | `Option<VersionEntry>` |
//! | `resolve_iteration(subject, id)` | `Option<Iteration>` |
//! | `between(subject, from, to)` | `Vec<VersionEntry>` in argument order |
//! | `before(subject, id)` / `after(subject, id)` | `Vec<VersionEntry>` ascending |
//! | `all(subject)` | `Vec<VersionEntry>` ascending |
//! | `has_previous` / `has_next` / `is_latest` | `bool` |
//! | `compare(a, b)` | [`Comparison`] |
//!
//! The engine holds no state of its own beyond configuration; it is safe to
//! share across threads whenever the store is.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use vestige_core::{SubjectId, Timestamp};
//! use vestige_engine::HistoryEngine;
//! use vestige_storage::InMemoryStore;
//!
//! let store = Arc::new(InMemoryStore::new());
//! let subject = SubjectId::new();
//! store.append(subject, None, Timestamp::from_secs(1)).unwrap();
//! store.append(subject, Some("v2".into()), Timestamp::from_secs(2)).unwrap();
//! store.append(subject, None, Timestamp::from_secs(3)).unwrap();
//!
//! let engine = HistoryEngine::new(Arc::clone(&store));
//! let newest_first = engine.between(subject, 3u64, "v2").unwrap();
//! assert_eq!(newest_first.len(), 2);
//! assert_eq!(newest_first[0].iteration().get(), 3);
//! ```

use crate::config::EngineConfig;
use crate::navigation;
use crate::ordering::{self, Comparison};
use crate::range::RangeQuery;
use crate::resolver::Resolver;
use vestige_core::{Identifier, Iteration, Subject, SubjectId, VersionEntry};
use vestige_storage::{StoreResult, VersionStore};

/// Query surface over one version store
pub struct HistoryEngine<S> {
    store: S,
    config: EngineConfig,
}

impl<S: VersionStore> HistoryEngine<S> {
    /// Create an engine with default configuration
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    /// Create an engine with the given configuration
    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolver bound to this engine's store
    pub fn resolver(&self) -> Resolver<'_, S> {
        Resolver::new(&self.store, &self.config)
    }

    fn ranges(&self) -> RangeQuery<'_, S> {
        RangeQuery::new(self.resolver())
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve an identifier to an entry of `subject`
    pub fn resolve_entry(
        &self,
        subject: SubjectId,
        identifier: impl Into<Identifier>,
    ) -> StoreResult<Option<VersionEntry>> {
        self.resolver().at(subject, &identifier.into())
    }

    /// Resolve an identifier to an iteration number of `subject`
    pub fn resolve_iteration(
        &self,
        subject: SubjectId,
        identifier: impl Into<Identifier>,
    ) -> StoreResult<Option<Iteration>> {
        self.resolver().iteration_at(subject, &identifier.into())
    }

    // =========================================================================
    // Ranges
    // =========================================================================

    /// Entries between two identifiers, inclusive, in argument order
    pub fn between(
        &self,
        subject: SubjectId,
        from: impl Into<Identifier>,
        to: impl Into<Identifier>,
    ) -> StoreResult<Vec<VersionEntry>> {
        self.ranges().between(subject, &from.into(), &to.into())
    }

    /// Entries strictly before the identifier
    pub fn before(
        &self,
        subject: SubjectId,
        value: impl Into<Identifier>,
    ) -> StoreResult<Vec<VersionEntry>> {
        self.ranges().before(subject, &value.into())
    }

    /// Entries strictly after the identifier
    pub fn after(
        &self,
        subject: SubjectId,
        value: impl Into<Identifier>,
    ) -> StoreResult<Vec<VersionEntry>> {
        self.ranges().after(subject, &value.into())
    }

    /// Full history, ascending
    pub fn all(&self, subject: SubjectId) -> StoreResult<Vec<VersionEntry>> {
        self.ranges().all(subject)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Whether a stored entry exists before the subject's position
    pub fn has_previous(&self, subject: &impl Subject) -> StoreResult<bool> {
        navigation::has_previous(&self.store, subject)
    }

    /// Whether a stored entry exists after the subject's position
    pub fn has_next(&self, subject: &impl Subject) -> StoreResult<bool> {
        navigation::has_next(&self.store, subject)
    }

    /// Whether the subject sits at its newest stored entry
    pub fn is_latest(&self, subject: &impl Subject) -> StoreResult<bool> {
        navigation::is_latest(&self.store, subject)
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    /// Compare two entries by iteration
    pub fn compare(&self, a: &VersionEntry, b: &VersionEntry) -> Comparison {
        ordering::compare(a, b)
    }
}
