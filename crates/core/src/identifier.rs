//! Version identifiers
//!
//! Callers name a point in a subject's history in one of five ways:
//!
//! | Variant | Example | Meaning |
//! |---------|---------|---------|
//! | `Timestamp` | `Timestamp::now()` | Last entry created at or before that time |
//! | `IterationNumber` | `3`, `2.9` | Entry at the floored iteration |
//! | `Tag` | `"v2"` | Entry carrying exactly that tag |
//! | `NamedQuery` | `NamedQuery::Last` | Predefined zero-argument store query |
//! | `DirectRef` | a `VersionEntry` | That entry, unchanged |
//!
//! The `From` conversions let call sites pass plain values:
//!
//! ```
//! use vestige_core::{Identifier, NamedQuery};
//!
//! let by_tag: Identifier = "v2".into();
//! let by_number: Identifier = 3u64.into();
//! let fractional: Identifier = 2.9f64.into();
//! let named: Identifier = NamedQuery::First.into();
//! # let _ = (by_tag, by_number, fractional, named);
//! ```

use crate::entry::VersionEntry;
use crate::types::{Iteration, Timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier naming one point in a subject's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Identifier {
    /// Point in time
    Timestamp(Timestamp),
    /// Iteration number, possibly fractional
    IterationNumber(IterationNumber),
    /// Exact tag match
    Tag(String),
    /// Predefined store query
    NamedQuery(NamedQuery),
    /// Already-resolved entry
    DirectRef(VersionEntry),
}

impl Identifier {
    /// Short name of the variant, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Identifier::Timestamp(_) => "timestamp",
            Identifier::IterationNumber(_) => "iteration",
            Identifier::Tag(_) => "tag",
            Identifier::NamedQuery(_) => "named_query",
            Identifier::DirectRef(_) => "direct_ref",
        }
    }
}

/// Numeric iteration identifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IterationNumber {
    /// Whole number, possibly negative
    Integer(i64),
    /// Whole non-negative number, mapped without loss
    Unsigned(u64),
    /// Fractional number, floored on resolution
    Fractional(f64),
}

impl IterationNumber {
    /// Floor to an iteration
    ///
    /// Negative values saturate to iteration 0, which never names a stored
    /// entry. Values beyond `u64::MAX` saturate to [`Iteration::MAX`]. `NaN`
    /// has no floor and yields `None`.
    pub fn floor(&self) -> Option<Iteration> {
        match *self {
            IterationNumber::Integer(n) => Some(Iteration::new(u64::try_from(n).unwrap_or(0))),
            IterationNumber::Unsigned(n) => Some(Iteration::new(n)),
            IterationNumber::Fractional(f) if f.is_nan() => None,
            // `as` saturates: negatives become 0, +inf becomes u64::MAX.
            IterationNumber::Fractional(f) => Some(Iteration::new(f.floor() as u64)),
        }
    }
}

/// Predefined zero-argument query over one subject's history
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedQuery {
    /// Entry with the lowest stored iteration
    First,
    /// Entry with the highest stored iteration
    Last,
    /// Store-specific query registered under a name
    Custom(String),
}

impl NamedQuery {
    /// Parse a query name
    ///
    /// `"first"` and `"last"` map to the built-in queries; anything else is
    /// a [`NamedQuery::Custom`] lookup.
    pub fn parse(name: &str) -> Self {
        match name {
            "first" => NamedQuery::First,
            "last" => NamedQuery::Last,
            other => NamedQuery::Custom(other.to_string()),
        }
    }

    /// Query name
    pub fn name(&self) -> &str {
        match self {
            NamedQuery::First => "first",
            NamedQuery::Last => "last",
            NamedQuery::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for NamedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Timestamp> for Identifier {
    fn from(value: Timestamp) -> Self {
        Identifier::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for Identifier {
    fn from(value: DateTime<Utc>) -> Self {
        Identifier::Timestamp(value.into())
    }
}

impl From<Iteration> for Identifier {
    fn from(value: Iteration) -> Self {
        Identifier::IterationNumber(IterationNumber::Unsigned(value.get()))
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        Iteration::new(value).into()
    }
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        Identifier::IterationNumber(IterationNumber::Unsigned(u64::from(value)))
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::IterationNumber(IterationNumber::Integer(value))
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        Identifier::IterationNumber(IterationNumber::Integer(i64::from(value)))
    }
}

impl From<f64> for Identifier {
    fn from(value: f64) -> Self {
        Identifier::IterationNumber(IterationNumber::Fractional(value))
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Tag(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::Tag(value)
    }
}

impl From<NamedQuery> for Identifier {
    fn from(value: NamedQuery) -> Self {
        Identifier::NamedQuery(value)
    }
}

impl From<VersionEntry> for Identifier {
    fn from(value: VersionEntry) -> Self {
        Identifier::DirectRef(value)
    }
}

impl From<&VersionEntry> for Identifier {
    fn from(value: &VersionEntry) -> Self {
        Identifier::DirectRef(value.clone())
    }
}
