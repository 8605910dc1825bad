//! Identifier resolution
//!
//! Turns an [`Identifier`] into either a concrete [`VersionEntry`]
//! ([`Resolver::at`]) or an iteration number ([`Resolver::iteration_at`]).
//!
//! ## Failure policy
//!
//! A missing, out-of-range, or malformed identifier is never an error: it
//! resolves to `None`. Only store failures surface as `Err`.
//!
//! The two entry points disagree on timestamps:
//!
//! | Variant | `at` miss | `iteration_at` miss |
//! |---------|-----------|---------------------|
//! | Timestamp | `None` | `Some(1)` |
//! | IterationNumber | `None` | floored value, no lookup |
//! | Tag / NamedQuery | `None` | `None` |
//!
//! The timestamp floor keeps "revert to how it looked at time T" usable for
//! times before the first entry.

use crate::config::EngineConfig;
use tracing::debug;
use vestige_core::{Identifier, Iteration, SubjectId, VersionEntry};
use vestige_storage::{StoreResult, VersionStore};

/// Resolves identifiers against one store
pub struct Resolver<'a, S: ?Sized> {
    store: &'a S,
    config: &'a EngineConfig,
}

impl<'a, S: VersionStore + ?Sized> Resolver<'a, S> {
    /// Create a resolver over `store`
    pub fn new(store: &'a S, config: &'a EngineConfig) -> Self {
        Self { store, config }
    }

    /// Underlying store
    pub fn store(&self) -> &'a S {
        self.store
    }

    /// Resolve an identifier to an entry of `subject`
    ///
    /// `DirectRef` is returned unchanged without touching the store.
    pub fn at(
        &self,
        subject: SubjectId,
        identifier: &Identifier,
    ) -> StoreResult<Option<VersionEntry>> {
        let resolved = match identifier {
            Identifier::Timestamp(at) => self.store.last_created_at_or_before(subject, *at)?,
            Identifier::IterationNumber(number) => match number.floor() {
                Some(iteration) => self.store.find_by_iteration(subject, iteration)?,
                None => None,
            },
            Identifier::Tag(tag) => self.store.find_by_tag(subject, tag)?,
            Identifier::NamedQuery(query) => self.store.query_named(subject, query)?,
            Identifier::DirectRef(entry) => Some(entry.clone()),
        };
        if resolved.is_none() {
            self.note_unresolved(subject, identifier);
        }
        Ok(resolved)
    }

    /// Resolve an identifier to an iteration number of `subject`
    pub fn iteration_at(
        &self,
        subject: SubjectId,
        identifier: &Identifier,
    ) -> StoreResult<Option<Iteration>> {
        let iteration = match identifier {
            Identifier::Timestamp(_) => Some(
                self.at(subject, identifier)?
                    .map(|entry| entry.iteration())
                    .unwrap_or(Iteration::FIRST),
            ),
            Identifier::IterationNumber(number) => {
                let floored = number.floor();
                if floored.is_none() {
                    self.note_unresolved(subject, identifier);
                }
                floored
            }
            Identifier::Tag(_) | Identifier::NamedQuery(_) => {
                self.at(subject, identifier)?.map(|entry| entry.iteration())
            }
            Identifier::DirectRef(entry) => Some(entry.iteration()),
        };
        Ok(iteration)
    }

    fn note_unresolved(&self, subject: SubjectId, identifier: &Identifier) {
        if self.config.log_unresolved {
            debug!(
                subject = %subject,
                kind = identifier.kind(),
                identifier = ?identifier,
                "Identifier did not resolve"
            );
        }
    }
}
