//! Core data model for vestige
//!
//! This crate defines the types shared by every layer:
//! - [`SubjectId`], [`Iteration`], [`Timestamp`]: scalar identities
//! - [`VersionEntry`]: one immutable checkpoint in a subject's history
//! - [`Identifier`]: the closed set of ways to name a checkpoint
//! - [`Subject`]: the minimal view of a versioned entity
//! - [`CoreError`]: data-model errors

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entry;
pub mod error;
pub mod identifier;
pub mod subject;
pub mod types;

pub use entry::VersionEntry;
pub use error::{CoreError, CoreResult};
pub use identifier::{Identifier, IterationNumber, NamedQuery};
pub use subject::{Subject, SubjectHandle};
pub use types::{Iteration, SubjectId, Timestamp};
