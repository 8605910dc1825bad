//! Range Query Tests
//!
//! Tests for between, before, after and all, including property checks.

use crate::common::*;
use proptest::prelude::*;
use vestige::prelude::*;

// =============================================================================
// WORKED EXAMPLE
// =============================================================================

#[test]
fn test_between_follows_argument_order() {
    let db = create_db();
    let (subject, _) = three_versions(&db);
    let versions = db.versions(subject);

    assert_eq!(iterations(&versions.between("v2", 3u64).unwrap()), vec![2, 3]);
    assert_eq!(iterations(&versions.between(3u64, "v2").unwrap()), vec![3, 2]);
    assert_eq!(iterations(&versions.before(3u64).unwrap()), vec![1, 2]);
}

#[test]
fn test_between_same_endpoint_is_single_entry() {
    let db = create_db();
    let (subject, entries) = three_versions(&db);

    assert_eq!(db.versions(subject).between("v2", 2u64).unwrap(), vec![entries[1].clone()]);
}

#[test]
fn test_between_mixed_identifier_kinds() {
    let db = create_db();
    let (subject, entries) = three_versions(&db);
    let versions = db.versions(subject);

    let found = versions
        .between(Timestamp::from_secs(150), &entries[2])
        .unwrap();
    assert_eq!(iterations(&found), vec![1, 2, 3]);
}

#[test]
fn test_unresolved_endpoint_gives_empty_range() {
    let db = create_db();
    let (subject, _) = three_versions(&db);
    let versions = db.versions(subject);

    assert!(versions.between("missing", 3u64).unwrap().is_empty());
    assert!(versions.before("missing").unwrap().is_empty());
    assert!(versions.after(NamedQuery::parse("nope")).unwrap().is_empty());
}

#[test]
fn test_after_is_ascending() {
    let db = create_db();
    let subject = linear_history(&db, 5);

    assert_eq!(iterations(&db.versions(subject).after(2u64).unwrap()), vec![3, 4, 5]);
}

#[test]
fn test_ranges_beyond_history() {
    let db = create_db();
    let subject = linear_history(&db, 3);
    let versions = db.versions(subject);

    assert!(versions.after(3u64).unwrap().is_empty());
    assert!(versions.before(1u64).unwrap().is_empty());
    assert_eq!(iterations(&versions.between(2u64, 99u64).unwrap()), vec![2, 3]);
}

#[test]
fn test_early_timestamp_range_starts_at_first() {
    let db = create_db();
    let (subject, _) = three_versions(&db);

    let found = db
        .versions(subject)
        .between(Timestamp::from_secs(1), "v2")
        .unwrap();
    assert_eq!(iterations(&found), vec![1, 2]);
}

#[test]
fn test_all_is_ascending() {
    let db = create_db();
    let subject = linear_history(&db, 4);

    assert_eq!(iterations(&db.versions(subject).all().unwrap()), vec![1, 2, 3, 4]);
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_between_reverses(len in 1u64..12, a in 1u64..12, b in 1u64..12) {
        let db = Vestige::ephemeral();
        let subject = linear_history(&db, len);
        let versions = db.versions(subject);

        let forward = versions.between(a, b).unwrap();
        let mut backward = versions.between(b, a).unwrap();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_before_at_after_partition_history(len in 1u64..12, x in 1u64..12) {
        prop_assume!(x <= len);
        let db = Vestige::ephemeral();
        let subject = linear_history(&db, len);
        let versions = db.versions(subject);

        let mut joined = versions.before(x).unwrap();
        joined.extend(versions.at(x).unwrap());
        joined.extend(versions.after(x).unwrap());
        prop_assert_eq!(joined, versions.all().unwrap());
    }
}
