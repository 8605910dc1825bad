//! Store configuration

use serde::{Deserialize, Serialize};

/// Which entry wins when several share the latest qualifying `created_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Highest iteration among the tied entries (default)
    #[default]
    HighestIteration,
    /// Lowest iteration among the tied entries
    LowestIteration,
}

/// Configuration for [`InMemoryStore`](crate::InMemoryStore)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Timestamp tie-break policy
    pub tie_break: TieBreak,
}

impl StoreConfig {
    /// Set the timestamp tie-break policy
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
