//! History API Integration Tests
//!
//! End-to-end checks of identifier resolution, range queries, navigation and
//! ordering through the public `Vestige` surface.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test history_api
//! cargo test --test history_api ranges::
//! ```

#[path = "../common/mod.rs"]
mod common;

mod navigation;
mod ranges;
mod resolve;
mod retention;
