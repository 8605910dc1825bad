//! # Vestige
//!
//! Identifier resolution and range queries over per-subject version
//! histories.
//!
//! Every subject (a document, a user record, a configuration) owns an
//! append-only history of version entries numbered 1, 2, 3, ... Vestige
//! answers questions about that history:
//!
//! - which version does this identifier name? (`at`, `iteration_at`)
//! - which versions lie between two identifiers? (`between`, `before`, `after`)
//! - can the subject move back or forward? (`has_previous`, `has_next`, `is_latest`)
//!
//! ## Quick Start
//!
//! ```
//! use vestige::prelude::*;
//!
//! let db = Vestige::ephemeral();
//! let user = SubjectId::new();
//!
//! db.record_at(user, None, Timestamp::from_secs(100))?;
//! db.record_at(user, Some("v2"), Timestamp::from_secs(200))?;
//! db.record_at(user, None, Timestamp::from_secs(300))?;
//!
//! let versions = db.versions(user);
//! assert_eq!(versions.between("v2", 3u64)?.len(), 2);
//! assert_eq!(versions.iteration_at(Timestamp::from_secs(250))?.map(|i| i.get()), Some(2));
//!
//! let first = SubjectHandle::new(user, Iteration::FIRST);
//! assert!(db.has_next(&first)?);
//! # Ok::<(), vestige::Error>(())
//! ```
//!
//! ## Identifiers
//!
//! | Kind | Example | Resolves to |
//! |------|---------|-------------|
//! | Iteration number | `3u64`, `2.9` | entry at the floored iteration |
//! | Tag | `"v2"` | entry with exactly that tag |
//! | Timestamp | `Timestamp::from_secs(250)` | last entry created at or before it |
//! | Named query | `NamedQuery::Last` | predefined store query |
//! | Entry | `&entry` | itself |
//!
//! Identifiers that name nothing are never errors: lookups return `None`
//! and ranges come back empty.

#![warn(missing_docs)]

mod config;
mod database;
mod error;
mod types;
mod versions;

pub mod prelude;

// Re-export main entry points
pub use config::Config;
pub use database::{Vestige, VestigeBuilder};
pub use error::{Error, Result};
pub use versions::Versions;

// Re-export types
pub use types::*;
