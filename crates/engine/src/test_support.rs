//! Shared fixtures for engine unit tests

use std::ops::Bound;
use vestige_core::{Iteration, NamedQuery, SubjectId, Timestamp, VersionEntry};
use vestige_storage::{Direction, InMemoryStore, StoreError, StoreResult, VersionStore};

/// Three-entry history: iterations 1, 2 ("v2"), 3 at increasing times
pub struct Fixture {
    pub store: InMemoryStore,
    pub subject: SubjectId,
    pub entries: Vec<VersionEntry>,
    pub times: Vec<Timestamp>,
}

pub fn fixture() -> Fixture {
    let store = InMemoryStore::new();
    let subject = SubjectId::new();
    let times = vec![
        Timestamp::from_secs(1_000),
        Timestamp::from_secs(2_000),
        Timestamp::from_secs(3_000),
    ];
    let entries = vec![
        store.append(subject, None, times[0]).unwrap(),
        store.append(subject, Some("v2".into()), times[1]).unwrap(),
        store.append(subject, None, times[2]).unwrap(),
    ];
    Fixture {
        store,
        subject,
        entries,
        times,
    }
}

/// Store whose every call fails
pub struct FailingStore;

fn unavailable<T>() -> StoreResult<T> {
    Err(StoreError::Backend("unavailable".to_string()))
}

impl VersionStore for FailingStore {
    fn find_by_iteration(&self, _: SubjectId, _: Iteration) -> StoreResult<Option<VersionEntry>> {
        unavailable()
    }

    fn find_by_tag(&self, _: SubjectId, _: &str) -> StoreResult<Option<VersionEntry>> {
        unavailable()
    }

    fn last_created_at_or_before(
        &self,
        _: SubjectId,
        _: Timestamp,
    ) -> StoreResult<Option<VersionEntry>> {
        unavailable()
    }

    fn min_iteration(&self, _: SubjectId) -> StoreResult<Option<Iteration>> {
        unavailable()
    }

    fn max_iteration(&self, _: SubjectId) -> StoreResult<Option<Iteration>> {
        unavailable()
    }

    fn query_range(
        &self,
        _: SubjectId,
        _: Bound<Iteration>,
        _: Bound<Iteration>,
        _: Direction,
    ) -> StoreResult<Vec<VersionEntry>> {
        unavailable()
    }

    fn query_named(&self, _: SubjectId, _: &NamedQuery) -> StoreResult<Option<VersionEntry>> {
        unavailable()
    }
}
