//! Navigation relative to a subject's current position
//!
//! Answers are computed against the iterations actually stored, so a
//! history whose oldest entries were pruned still navigates correctly. A
//! subject without entries has neither a previous nor a next entry.

use vestige_core::Subject;
use vestige_storage::{StoreResult, VersionStore};

/// Whether a stored entry exists before the subject's current iteration
pub fn has_previous<S, T>(store: &S, subject: &T) -> StoreResult<bool>
where
    S: VersionStore + ?Sized,
    T: Subject + ?Sized,
{
    Ok(match store.min_iteration(subject.subject_id())? {
        Some(min) => subject.current_iteration() > min,
        None => false,
    })
}

/// Whether a stored entry exists after the subject's current iteration
pub fn has_next<S, T>(store: &S, subject: &T) -> StoreResult<bool>
where
    S: VersionStore + ?Sized,
    T: Subject + ?Sized,
{
    Ok(match store.max_iteration(subject.subject_id())? {
        Some(max) => subject.current_iteration() < max,
        None => false,
    })
}

/// Whether the subject sits at (or beyond) its newest stored entry
pub fn is_latest<S, T>(store: &S, subject: &T) -> StoreResult<bool>
where
    S: VersionStore + ?Sized,
    T: Subject + ?Sized,
{
    Ok(!has_next(store, subject)?)
}
