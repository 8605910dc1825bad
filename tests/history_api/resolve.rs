//! Identifier Resolution Tests
//!
//! Tests for `at` and `iteration_at` across every identifier kind.

use crate::common::*;
use vestige::prelude::*;

// =============================================================================
// ITERATION NUMBERS
// =============================================================================

#[test]
fn test_fractional_number_floors() {
    let db = create_db();
    let (subject, _) = three_versions(&db);
    let versions = db.versions(subject);

    assert_eq!(versions.iteration_at(2.9).unwrap(), Some(Iteration::new(2)));
    assert_eq!(versions.at(2.9).unwrap().map(|e| e.iteration().get()), Some(2));
}

#[test]
fn test_number_resolves_without_entry() {
    let db = create_db();
    let (subject, _) = three_versions(&db);
    let versions = db.versions(subject);

    // iteration_at never consults the store for numbers
    assert_eq!(versions.iteration_at(42u64).unwrap(), Some(Iteration::new(42)));
    assert!(versions.at(42u64).unwrap().is_none());
}

#[test]
fn test_nan_is_unresolvable() {
    let db = create_db();
    let (subject, _) = three_versions(&db);
    let versions = db.versions(subject);

    assert!(versions.iteration_at(f64::NAN).unwrap().is_none());
    assert!(versions.at(f64::NAN).unwrap().is_none());
    assert!(versions.between(f64::NAN, 3u64).unwrap().is_empty());
}

#[test]
fn test_negative_number_names_nothing() {
    let db = create_db();
    let (subject, _) = three_versions(&db);
    let versions = db.versions(subject);

    assert!(versions.at(-1i64).unwrap().is_none());
    // Negatives saturate to 0, below every stored iteration
    assert_eq!(versions.iteration_at(-3i64).unwrap(), Some(Iteration::new(0)));
    assert_eq!(iterations(&versions.between(-3i64, 2u64).unwrap()), vec![1, 2]);
}

#[test]
fn test_iterations_above_i64_range_resolve_exactly() {
    let db = create_db();
    let subject = SubjectId::new();
    let big = (i64::MAX as u64) + 5;
    let entry = VersionEntry::new(subject, Iteration::new(big), Timestamp::from_secs(1));
    db.store().insert(entry.clone()).unwrap();
    let versions = db.versions(subject);

    assert_eq!(versions.iteration_at(big).unwrap(), Some(Iteration::new(big)));
    assert_eq!(versions.at(big).unwrap(), Some(entry.clone()));
    assert_eq!(versions.at(Iteration::new(big)).unwrap(), Some(entry));
    assert_eq!(versions.iteration_at(u64::MAX).unwrap(), Some(Iteration::MAX));
}

// =============================================================================
// TAGS
// =============================================================================

#[test]
fn test_tag_resolves_exactly() {
    let db = create_db();
    let (subject, entries) = three_versions(&db);
    let versions = db.versions(subject);

    assert_eq!(versions.at("v2").unwrap(), Some(entries[1].clone()));
    assert_eq!(versions.iteration_at("v2").unwrap(), Some(Iteration::new(2)));
}

#[test]
fn test_unknown_tag_is_absent() {
    let db = create_db();
    let (subject, _) = three_versions(&db);
    let versions = db.versions(subject);

    assert!(versions.at("v9").unwrap().is_none());
    assert!(versions.iteration_at("v9").unwrap().is_none());
}

#[test]
fn test_tag_match_is_case_sensitive() {
    let db = create_db();
    let (subject, _) = three_versions(&db);

    assert!(db.versions(subject).at("V2").unwrap().is_none());
}

#[test]
fn test_tags_are_scoped_per_subject() {
    let db = create_db();
    let (subject, _) = three_versions(&db);
    let (other, other_entries) = three_versions(&db);

    let found = db.versions(other).at("v2").unwrap().unwrap();
    assert_eq!(found, other_entries[1]);
    assert_ne!(found.subject(), subject);
}

// =============================================================================
// TIMESTAMPS
// =============================================================================

#[test]
fn test_timestamp_picks_last_created_at_or_before() {
    let db = create_db();
    let (subject, _) = three_versions(&db);
    let versions = db.versions(subject);

    assert_eq!(
        versions.iteration_at(Timestamp::from_secs(250)).unwrap(),
        Some(Iteration::new(2))
    );
    assert_eq!(
        versions.iteration_at(Timestamp::from_secs(300)).unwrap(),
        Some(Iteration::new(3))
    );
}

#[test]
fn test_timestamp_before_history_floors_to_one() {
    let db = create_db();
    let (subject, _) = three_versions(&db);
    let versions = db.versions(subject);

    let early = Timestamp::from_secs(5);
    assert_eq!(versions.iteration_at(early).unwrap(), Some(Iteration::FIRST));
    assert!(versions.at(early).unwrap().is_none());
}

#[test]
fn test_datetime_identifier() {
    use chrono::{TimeZone, Utc};

    let db = create_db();
    let subject = SubjectId::from_uuid(uuid::Uuid::new_v4());
    let release = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    db.record_at(subject, None, Timestamp::from(release)).unwrap();
    db.record_at(subject, Some("hotfix"), Timestamp::from(release + chrono::Duration::days(3)))
        .unwrap();

    let versions = db.versions(subject);
    let midway = release + chrono::Duration::days(1);
    assert_eq!(versions.iteration_at(midway).unwrap(), Some(Iteration::FIRST));
    assert_eq!(
        versions.at(release + chrono::Duration::days(7)).unwrap().and_then(|e| e.tag().map(String::from)),
        Some("hotfix".to_string())
    );
}

// =============================================================================
// NAMED QUERIES AND DIRECT REFERENCES
// =============================================================================

#[test]
fn test_first_and_last() {
    let db = create_db();
    let (subject, entries) = three_versions(&db);
    let versions = db.versions(subject);

    assert_eq!(versions.at(NamedQuery::First).unwrap(), Some(entries[0].clone()));
    assert_eq!(versions.at(NamedQuery::Last).unwrap(), Some(entries[2].clone()));
}

#[test]
fn test_custom_named_query() {
    let db = create_db();
    let (subject, _) = three_versions(&db);
    db.store().register_named_query("latest_tagged", |entries: &[VersionEntry]| {
        entries.iter().rev().find(|e| e.tag().is_some()).cloned()
    });

    let versions = db.versions(subject);
    assert_eq!(
        versions.iteration_at(NamedQuery::parse("latest_tagged")).unwrap(),
        Some(Iteration::new(2))
    );
    assert!(versions.at(NamedQuery::parse("unregistered")).unwrap().is_none());
}

#[test]
fn test_direct_reference_is_identity() {
    let db = create_db();
    let (subject, entries) = three_versions(&db);
    let versions = db.versions(subject);

    assert_eq!(versions.at(&entries[1]).unwrap(), Some(entries[1].clone()));
    assert_eq!(versions.iteration_at(&entries[2]).unwrap(), Some(Iteration::new(3)));
}

#[test]
fn test_unknown_subject_resolves_nothing() {
    let db = create_db();
    let versions = db.versions(SubjectId::new());

    assert!(versions.at(1u64).unwrap().is_none());
    assert!(versions.at(NamedQuery::Last).unwrap().is_none());
    assert_eq!(
        versions.iteration_at(Timestamp::from_secs(1)).unwrap(),
        Some(Iteration::FIRST)
    );
}
