//! Shared fixtures for integration tests.

#![allow(dead_code)]

use vestige::prelude::*;

/// Route `tracing` output through the test harness.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Fresh in-memory database.
pub fn create_db() -> Vestige {
    init_tracing();
    Vestige::ephemeral()
}

/// Subject with three versions at 100s, 200s and 300s; the second is tagged "v2".
pub fn three_versions(db: &Vestige) -> (SubjectId, Vec<VersionEntry>) {
    let subject = SubjectId::new();
    let entries = vec![
        db.record_at(subject, None, Timestamp::from_secs(100)).unwrap(),
        db.record_at(subject, Some("v2"), Timestamp::from_secs(200)).unwrap(),
        db.record_at(subject, None, Timestamp::from_secs(300)).unwrap(),
    ];
    (subject, entries)
}

/// Subject with `n` untagged versions, one second apart.
pub fn linear_history(db: &Vestige, n: u64) -> SubjectId {
    let subject = SubjectId::new();
    for secs in 1..=n {
        db.record_at(subject, None, Timestamp::from_secs(secs)).unwrap();
    }
    subject
}

/// Iteration numbers of a result set, in order.
pub fn iterations(entries: &[VersionEntry]) -> Vec<u64> {
    entries.iter().map(|e| e.iteration().get()).collect()
}
