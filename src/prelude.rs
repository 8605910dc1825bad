//! Convenient imports for Vestige.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use vestige::prelude::*;
//!
//! let db = Vestige::ephemeral();
//! let subject = SubjectId::new();
//! db.record(subject)?;
//! # Ok::<(), vestige::Error>(())
//! ```

// Main entry point
pub use crate::database::{Vestige, VestigeBuilder};
pub use crate::versions::Versions;

// Configuration
pub use crate::config::Config;

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::types::{
    Comparison, Identifier, Iteration, NamedQuery, Subject, SubjectHandle, SubjectId, TieBreak,
    Timestamp, VersionEntry,
};
