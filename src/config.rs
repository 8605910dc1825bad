//! Configuration for Vestige.
//!
//! Configuration is plain TOML. Every section and key is optional:
//!
//! ```toml
//! [store]
//! tie_break = "highest_iteration"   # or "lowest_iteration"
//!
//! [engine]
//! log_unresolved = true
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use vestige_engine::EngineConfig;
use vestige_storage::StoreConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// In-memory store settings
    pub store: StoreConfig,
    /// Engine settings
    pub engine: EngineConfig,
}

impl Config {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }
}
