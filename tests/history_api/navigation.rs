//! Navigation Tests
//!
//! Tests for has_previous, has_next and is_latest.

use crate::common::*;
use vestige::prelude::*;

#[test]
fn test_first_of_three() {
    let db = create_db();
    let subject = linear_history(&db, 3);
    let first = SubjectHandle::new(subject, Iteration::FIRST);

    assert!(!db.has_previous(&first).unwrap());
    assert!(db.has_next(&first).unwrap());
    assert!(!db.is_latest(&first).unwrap());
}

#[test]
fn test_middle_and_latest() {
    let db = create_db();
    let subject = linear_history(&db, 3);
    let latest = db.subject(subject).unwrap();
    let middle = latest.at(Iteration::new(2));

    assert!(db.has_previous(&middle).unwrap());
    assert!(db.has_next(&middle).unwrap());

    assert_eq!(latest.current, Iteration::new(3));
    assert!(db.has_previous(&latest).unwrap());
    assert!(db.is_latest(&latest).unwrap());
}

#[test]
fn test_single_entry() {
    let db = create_db();
    let subject = linear_history(&db, 1);
    let only = db.subject(subject).unwrap();

    assert!(!db.has_previous(&only).unwrap());
    assert!(!db.has_next(&only).unwrap());
    assert!(db.is_latest(&only).unwrap());
}

#[test]
fn test_empty_history() {
    let db = create_db();
    let handle = SubjectHandle::new(SubjectId::new(), Iteration::FIRST);

    assert!(!db.has_previous(&handle).unwrap());
    assert!(!db.has_next(&handle).unwrap());
    assert!(db.is_latest(&handle).unwrap());
}

#[test]
fn test_handle_moves_with_new_versions() {
    let db = create_db();
    let subject = linear_history(&db, 2);
    let handle = db.subject(subject).unwrap();
    assert!(db.is_latest(&handle).unwrap());

    db.record_at(subject, None, Timestamp::from_secs(10)).unwrap();
    assert!(db.has_next(&handle).unwrap());
}
