//! Store interface consumed by the engine
//!
//! [`VersionStore`] is the only thing the engine knows about storage. Every
//! method is scoped to one subject, so a relational backend, a log-structured
//! backend, and [`InMemoryStore`](crate::InMemoryStore) all fit behind it.
//!
//! ## Contract
//!
//! - Each call observes one consistent snapshot of the subject's history.
//!   Nothing is promised across calls.
//! - Absence is `Ok(None)` / `Ok(vec![])`; `Err` is reserved for backend
//!   failures, which the engine propagates unchanged.
//! - `last_created_at_or_before` breaks `created_at` ties deterministically.
//!   The default expectation is that the highest iteration wins.

use crate::error::StoreResult;
use std::ops::Bound;
use std::sync::Arc;
use vestige_core::{Iteration, NamedQuery, SubjectId, Timestamp, VersionEntry};

/// Order of entries returned by [`VersionStore::query_range`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Lowest iteration first
    #[default]
    Ascending,
    /// Highest iteration first
    Descending,
}

/// Subject-scoped, read-only access to version entries
pub trait VersionStore: Send + Sync {
    /// Entry with exactly this iteration
    fn find_by_iteration(
        &self,
        subject: SubjectId,
        iteration: Iteration,
    ) -> StoreResult<Option<VersionEntry>>;

    /// Entry carrying exactly this tag
    fn find_by_tag(&self, subject: SubjectId, tag: &str) -> StoreResult<Option<VersionEntry>>;

    /// Last entry (by `created_at`) created at or before `at`
    fn last_created_at_or_before(
        &self,
        subject: SubjectId,
        at: Timestamp,
    ) -> StoreResult<Option<VersionEntry>>;

    /// Lowest stored iteration, `None` if the history is empty
    fn min_iteration(&self, subject: SubjectId) -> StoreResult<Option<Iteration>>;

    /// Highest stored iteration, `None` if the history is empty
    fn max_iteration(&self, subject: SubjectId) -> StoreResult<Option<Iteration>>;

    /// Entries whose iteration lies within `(low, high)`, in `direction` order
    ///
    /// An empty or inverted span yields an empty result, never an error.
    fn query_range(
        &self,
        subject: SubjectId,
        low: Bound<Iteration>,
        high: Bound<Iteration>,
        direction: Direction,
    ) -> StoreResult<Vec<VersionEntry>>;

    /// Evaluate a predefined zero-argument query
    ///
    /// The default implementation answers `First` and `Last` through the
    /// iteration bounds and knows no custom queries.
    fn query_named(
        &self,
        subject: SubjectId,
        query: &NamedQuery,
    ) -> StoreResult<Option<VersionEntry>> {
        let iteration = match query {
            NamedQuery::First => self.min_iteration(subject)?,
            NamedQuery::Last => self.max_iteration(subject)?,
            NamedQuery::Custom(_) => None,
        };
        match iteration {
            Some(iteration) => self.find_by_iteration(subject, iteration),
            None => Ok(None),
        }
    }
}

/// Whether a bound pair selects nothing
///
/// Also guards `BTreeMap::range`, which panics on inverted bounds.
pub fn is_empty_span(low: Bound<Iteration>, high: Bound<Iteration>) -> bool {
    use Bound::{Excluded, Included};
    match (low, high) {
        (Included(l), Included(h)) => l > h,
        (Included(l), Excluded(h)) | (Excluded(l), Included(h)) | (Excluded(l), Excluded(h)) => {
            l >= h
        }
        _ => false,
    }
}

impl<S: VersionStore + ?Sized> VersionStore for Arc<S> {
    fn find_by_iteration(
        &self,
        subject: SubjectId,
        iteration: Iteration,
    ) -> StoreResult<Option<VersionEntry>> {
        (**self).find_by_iteration(subject, iteration)
    }

    fn find_by_tag(&self, subject: SubjectId, tag: &str) -> StoreResult<Option<VersionEntry>> {
        (**self).find_by_tag(subject, tag)
    }

    fn last_created_at_or_before(
        &self,
        subject: SubjectId,
        at: Timestamp,
    ) -> StoreResult<Option<VersionEntry>> {
        (**self).last_created_at_or_before(subject, at)
    }

    fn min_iteration(&self, subject: SubjectId) -> StoreResult<Option<Iteration>> {
        (**self).min_iteration(subject)
    }

    fn max_iteration(&self, subject: SubjectId) -> StoreResult<Option<Iteration>> {
        (**self).max_iteration(subject)
    }

    fn query_range(
        &self,
        subject: SubjectId,
        low: Bound<Iteration>,
        high: Bound<Iteration>,
        direction: Direction,
    ) -> StoreResult<Vec<VersionEntry>> {
        (**self).query_range(subject, low, high, direction)
    }

    fn query_named(
        &self,
        subject: SubjectId,
        query: &NamedQuery,
    ) -> StoreResult<Option<VersionEntry>> {
        (**self).query_named(subject, query)
    }
}

impl<S: VersionStore + ?Sized> VersionStore for &S {
    fn find_by_iteration(
        &self,
        subject: SubjectId,
        iteration: Iteration,
    ) -> StoreResult<Option<VersionEntry>> {
        (**self).find_by_iteration(subject, iteration)
    }

    fn find_by_tag(&self, subject: SubjectId, tag: &str) -> StoreResult<Option<VersionEntry>> {
        (**self).find_by_tag(subject, tag)
    }

    fn last_created_at_or_before(
        &self,
        subject: SubjectId,
        at: Timestamp,
    ) -> StoreResult<Option<VersionEntry>> {
        (**self).last_created_at_or_before(subject, at)
    }

    fn min_iteration(&self, subject: SubjectId) -> StoreResult<Option<Iteration>> {
        (**self).min_iteration(subject)
    }

    fn max_iteration(&self, subject: SubjectId) -> StoreResult<Option<Iteration>> {
        (**self).max_iteration(subject)
    }

    fn query_range(
        &self,
        subject: SubjectId,
        low: Bound<Iteration>,
        high: Bound<Iteration>,
        direction: Direction,
    ) -> StoreResult<Vec<VersionEntry>> {
        (**self).query_range(subject, low, high, direction)
    }

    fn query_named(
        &self,
        subject: SubjectId,
        query: &NamedQuery,
    ) -> StoreResult<Option<VersionEntry>> {
        (**self).query_named(subject, query)
    }
}
