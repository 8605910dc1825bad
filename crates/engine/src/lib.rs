//! Query engine for vestige
//!
//! This crate resolves identifiers and answers history questions against a
//! [`VersionStore`](vestige_storage::VersionStore):
//! - Resolver: identifier -> entry or iteration
//! - RangeQuery: between / before / after / all
//! - navigation: has_previous / has_next / is_latest
//! - ordering: cross-subject-aware comparison
//! - HistoryEngine: all of the above behind one handle
//!
//! The engine is stateless; every answer comes from the store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod history;
pub mod navigation;
pub mod ordering;
pub mod range;
pub mod resolver;

#[cfg(test)]
mod test_support;

pub use config::EngineConfig;
pub use history::HistoryEngine;
pub use ordering::{compare, Comparison};
pub use range::RangeQuery;
pub use resolver::Resolver;
