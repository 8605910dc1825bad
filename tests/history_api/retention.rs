//! Retention Tests
//!
//! Tests that resolution and navigation stay correct after pruning and
//! truncating history.

use crate::common::*;
use vestige::prelude::*;

#[test]
fn test_pruned_history_navigation() {
    let db = create_db();
    let subject = linear_history(&db, 5);
    assert_eq!(db.store().prune_before(subject, Iteration::new(3)), 2);

    let oldest = SubjectHandle::new(subject, Iteration::new(3));
    assert!(!db.has_previous(&oldest).unwrap());
    assert!(db.has_previous(&oldest.at(Iteration::new(4))).unwrap());
    assert_eq!(
        db.versions(subject).first().unwrap().map(|e| e.iteration().get()),
        Some(3)
    );
}

#[test]
fn test_pruned_iterations_resolve_to_nothing() {
    let db = create_db();
    let subject = linear_history(&db, 5);
    db.store().prune_before(subject, Iteration::new(3));
    let versions = db.versions(subject);

    assert!(versions.at(1u64).unwrap().is_none());
    assert_eq!(iterations(&versions.between(1u64, 4u64).unwrap()), vec![3, 4]);
    assert_eq!(iterations(&versions.before(5u64).unwrap()), vec![3, 4]);
}

#[test]
fn test_truncate_then_append_reuses_iterations() {
    let db = create_db();
    let subject = linear_history(&db, 5);
    assert_eq!(db.store().truncate_after(subject, Iteration::new(2)), 3);

    let next = db.record_at(subject, None, Timestamp::from_secs(10)).unwrap();
    assert_eq!(next.iteration(), Iteration::new(3));
    assert_eq!(db.versions(subject).count(), 3);
}

#[test]
fn test_rejected_writes() {
    let db = create_db();
    let (subject, _) = three_versions(&db);

    let err = db
        .record_at(subject, None, Timestamp::from_secs(1))
        .unwrap_err();
    assert!(err.is_constraint_violation());

    let err = db
        .record_at(subject, Some("v2"), Timestamp::from_secs(400))
        .unwrap_err();
    assert!(err.is_constraint_violation());
    assert_eq!(db.versions(subject).count(), 3);
}
