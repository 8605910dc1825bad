//! Range queries over one subject's history
//!
//! Endpoints are resolved with [`Resolver::iteration_at`]; an endpoint that
//! does not resolve turns the whole query into an empty result.
//!
//! | Query | Selection | Order |
//! |-------|-----------|-------|
//! | `between(from, to)` | `min..=max` of both endpoints | follows argument order |
//! | `before(x)` | iterations `< x` | ascending |
//! | `after(x)` | iterations `> x` | ascending |
//! | `all()` | everything | ascending |
//!
//! The two endpoint resolutions in `between` are separate store calls. A
//! concurrent append between them can be observed; appends never move
//! already-committed iterations, so the selected span stays meaningful.

use crate::resolver::Resolver;
use std::ops::Bound;
use tracing::trace;
use vestige_core::{Identifier, SubjectId, VersionEntry};
use vestige_storage::{Direction, StoreResult, VersionStore};

/// Range query operations backed by a resolver
pub struct RangeQuery<'a, S: ?Sized> {
    resolver: Resolver<'a, S>,
}

impl<'a, S: VersionStore + ?Sized> RangeQuery<'a, S> {
    /// Create range queries on top of `resolver`
    pub fn new(resolver: Resolver<'a, S>) -> Self {
        Self { resolver }
    }

    /// Entries between two identifiers, inclusive
    ///
    /// Ascending when `from` resolves at or below `to`, descending otherwise.
    pub fn between(
        &self,
        subject: SubjectId,
        from: &Identifier,
        to: &Identifier,
    ) -> StoreResult<Vec<VersionEntry>> {
        let from_iteration = self.resolver.iteration_at(subject, from)?;
        let to_iteration = self.resolver.iteration_at(subject, to)?;
        let (Some(from_iteration), Some(to_iteration)) = (from_iteration, to_iteration) else {
            return Ok(Vec::new());
        };

        let (low, high, direction) = if from_iteration <= to_iteration {
            (from_iteration, to_iteration, Direction::Ascending)
        } else {
            (to_iteration, from_iteration, Direction::Descending)
        };
        trace!(subject = %subject, %low, %high, ?direction, "between");
        self.resolver.store().query_range(
            subject,
            Bound::Included(low),
            Bound::Included(high),
            direction,
        )
    }

    /// Entries strictly before the identifier, ascending
    pub fn before(
        &self,
        subject: SubjectId,
        value: &Identifier,
    ) -> StoreResult<Vec<VersionEntry>> {
        let Some(iteration) = self.resolver.iteration_at(subject, value)? else {
            return Ok(Vec::new());
        };
        trace!(subject = %subject, %iteration, "before");
        self.resolver.store().query_range(
            subject,
            Bound::Unbounded,
            Bound::Excluded(iteration),
            Direction::Ascending,
        )
    }

    /// Entries strictly after the identifier, ascending
    pub fn after(&self, subject: SubjectId, value: &Identifier) -> StoreResult<Vec<VersionEntry>> {
        let Some(iteration) = self.resolver.iteration_at(subject, value)? else {
            return Ok(Vec::new());
        };
        trace!(subject = %subject, %iteration, "after");
        self.resolver.store().query_range(
            subject,
            Bound::Excluded(iteration),
            Bound::Unbounded,
            Direction::Ascending,
        )
    }

    /// Full history, ascending
    pub fn all(&self, subject: SubjectId) -> StoreResult<Vec<VersionEntry>> {
        self.resolver.store().query_range(
            subject,
            Bound::Unbounded,
            Bound::Unbounded,
            Direction::Ascending,
        )
    }
}
