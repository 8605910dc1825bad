//! Comparison of version entries
//!
//! Entries order by iteration within one subject. Across subjects there is
//! no order, and [`compare`] says so instead of guessing.

use std::cmp::Ordering;
use vestige_core::VersionEntry;

/// Outcome of comparing two entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Left entry has the lower iteration
    Less,
    /// Same subject, same iteration
    Equal,
    /// Left entry has the higher iteration
    Greater,
    /// Entries belong to different subjects
    Incomparable,
}

impl Comparison {
    /// The equivalent `Ordering`, if the entries were comparable
    pub fn ordering(&self) -> Option<Ordering> {
        match self {
            Comparison::Less => Some(Ordering::Less),
            Comparison::Equal => Some(Ordering::Equal),
            Comparison::Greater => Some(Ordering::Greater),
            Comparison::Incomparable => None,
        }
    }

    /// Whether the entries shared a subject
    pub fn is_comparable(&self) -> bool {
        !matches!(self, Comparison::Incomparable)
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

/// Compare two entries by iteration
pub fn compare(a: &VersionEntry, b: &VersionEntry) -> Comparison {
    a.partial_cmp(b)
        .map(Comparison::from)
        .unwrap_or(Comparison::Incomparable)
}
