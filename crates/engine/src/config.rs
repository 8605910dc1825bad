//! Engine configuration

use serde::{Deserialize, Serialize};

/// Configuration for [`HistoryEngine`](crate::HistoryEngine)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Emit a `debug` event whenever an identifier fails to resolve
    pub log_unresolved: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_unresolved: true,
        }
    }
}

impl EngineConfig {
    /// Toggle logging of unresolved identifiers
    pub fn with_log_unresolved(mut self, enabled: bool) -> Self {
        self.log_unresolved = enabled;
        self
    }
}
