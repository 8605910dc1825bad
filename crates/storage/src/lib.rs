//! Storage layer for vestige
//!
//! This crate defines the store boundary and a reference backend:
//! - VersionStore: subject-scoped query interface consumed by the engine
//! - InMemoryStore: DashMap-sharded, BTreeMap-ordered implementation
//! - StoreConfig: timestamp tie-break policy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod sharded;
pub mod traits;

pub use config::{StoreConfig, TieBreak};
pub use error::{StoreError, StoreResult};
pub use sharded::{InMemoryStore, NamedQueryFn};
pub use traits::{is_empty_span, Direction, VersionStore};
