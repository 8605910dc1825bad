//! Public types for the Vestige API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Core data model
pub use vestige_core::{Identifier, IterationNumber, NamedQuery};
pub use vestige_core::{Iteration, SubjectId, Timestamp};
pub use vestige_core::{Subject, SubjectHandle, VersionEntry};

// Store boundary, for plugging in another backend
pub use vestige_storage::{Direction, InMemoryStore, StoreConfig, TieBreak, VersionStore};

// Engine, for use over another backend
pub use vestige_engine::{Comparison, EngineConfig, HistoryEngine};
