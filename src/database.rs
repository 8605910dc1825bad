//! Main entry point for Vestige.
//!
//! This module provides the `Vestige` struct, which owns an in-memory
//! version store and the query engine running over it.

use crate::config::Config;
use crate::error::Result;
use crate::versions::Versions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use vestige_core::{Subject, SubjectHandle, SubjectId, Timestamp, VersionEntry};
use vestige_engine::{Comparison, HistoryEngine};
use vestige_storage::{InMemoryStore, TieBreak};

/// The Vestige history database.
///
/// Create one with [`Vestige::ephemeral`] or [`Vestige::builder`].
///
/// # Example
///
/// ```
/// use vestige::prelude::*;
///
/// let db = Vestige::ephemeral();
/// let user = SubjectId::new();
///
/// db.record_at(user, None, Timestamp::from_secs(1))?;
/// db.record_at(user, Some("v2"), Timestamp::from_secs(2))?;
/// db.record_at(user, None, Timestamp::from_secs(3))?;
///
/// let versions = db.versions(user);
/// let newest_first = versions.between(3u64, "v2")?;
/// assert_eq!(newest_first[0].iteration().get(), 3);
/// assert_eq!(versions.before(3u64)?.len(), 2);
/// # Ok::<(), vestige::Error>(())
/// ```
pub struct Vestige {
    store: Arc<InMemoryStore>,
    engine: HistoryEngine<Arc<InMemoryStore>>,
}

impl Vestige {
    /// Create an in-memory database with default settings.
    pub fn ephemeral() -> Self {
        Self::from_config(Config::default())
    }

    /// Create a builder for database configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use vestige::prelude::*;
    ///
    /// let db = Vestige::builder()
    ///     .tie_break(TieBreak::LowestIteration)
    ///     .log_unresolved(false)
    ///     .open()?;
    /// # Ok::<(), vestige::Error>(())
    /// ```
    pub fn builder() -> VestigeBuilder {
        VestigeBuilder::new()
    }

    fn from_config(config: Config) -> Self {
        debug!(tie_break = ?config.store.tie_break, log_unresolved = config.engine.log_unresolved, "Opening history database");
        let store = Arc::new(InMemoryStore::with_config(config.store));
        let engine = HistoryEngine::with_config(Arc::clone(&store), config.engine);
        Self { store, engine }
    }

    /// Underlying store, for retention and named-query registration.
    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }

    /// Query engine over the store.
    pub fn engine(&self) -> &HistoryEngine<Arc<InMemoryStore>> {
        &self.engine
    }

    // =========================================================================
    // Recording
    // =========================================================================

    /// Record a new untagged version created now.
    pub fn record(&self, subject: SubjectId) -> Result<VersionEntry> {
        Ok(self.store.append_now(subject, None)?)
    }

    /// Record a new tagged version created now.
    pub fn record_tagged(&self, subject: SubjectId, tag: &str) -> Result<VersionEntry> {
        Ok(self.store.append_now(subject, Some(tag.to_string()))?)
    }

    /// Record a new version with an explicit creation time.
    pub fn record_at(
        &self,
        subject: SubjectId,
        tag: Option<&str>,
        created_at: Timestamp,
    ) -> Result<VersionEntry> {
        Ok(self
            .store
            .append(subject, tag.map(str::to_string), created_at)?)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Version history of one subject.
    pub fn versions(&self, subject: SubjectId) -> Versions<'_> {
        Versions::new(&self.engine, subject)
    }

    /// Handle positioned at the subject's latest version.
    ///
    /// Returns `None` if the subject has no versions.
    pub fn subject(&self, subject: SubjectId) -> Option<SubjectHandle> {
        self.store.subject(subject)
    }

    /// Whether an older stored version exists.
    pub fn has_previous(&self, subject: &impl Subject) -> Result<bool> {
        Ok(self.engine.has_previous(subject)?)
    }

    /// Whether a newer stored version exists.
    pub fn has_next(&self, subject: &impl Subject) -> Result<bool> {
        Ok(self.engine.has_next(subject)?)
    }

    /// Whether the subject sits at its newest version.
    pub fn is_latest(&self, subject: &impl Subject) -> Result<bool> {
        Ok(self.engine.is_latest(subject)?)
    }

    /// Compare two versions.
    pub fn compare(&self, a: &VersionEntry, b: &VersionEntry) -> Comparison {
        self.engine.compare(a, b)
    }
}

/// Builder for database configuration.
///
/// Settings from [`config_file`](Self::config_file) or
/// [`config`](Self::config) form the base; individual setters override them.
#[derive(Debug, Default)]
pub struct VestigeBuilder {
    config: Config,
    config_path: Option<PathBuf>,
    tie_break: Option<TieBreak>,
    log_unresolved: Option<bool>,
}

impl VestigeBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already-built configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a TOML file when opening.
    pub fn config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Choose which entry wins a `created_at` tie.
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = Some(tie_break);
        self
    }

    /// Toggle debug logging of unresolved identifiers.
    pub fn log_unresolved(mut self, enabled: bool) -> Self {
        self.log_unresolved = Some(enabled);
        self
    }

    /// Resolve the final configuration without opening.
    pub fn build_config(&self) -> Result<Config> {
        let mut config = match &self.config_path {
            Some(path) => Config::load(path)?,
            None => self.config.clone(),
        };
        if let Some(tie_break) = self.tie_break {
            config.store.tie_break = tie_break;
        }
        if let Some(enabled) = self.log_unresolved {
            config.engine.log_unresolved = enabled;
        }
        Ok(config)
    }

    /// Open the database.
    pub fn open(self) -> Result<Vestige> {
        Ok(Vestige::from_config(self.build_config()?))
    }
}
