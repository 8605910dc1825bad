//! Sharded in-memory version store
//!
//! Reference [`VersionStore`] implementation backed by memory only.
//!
//! # Design
//!
//! - DashMap: one shard per subject, lock-free reads across subjects
//! - BTreeMap: entries ordered by iteration, so range queries are a walk
//! - FxHashMap: O(1) tag lookups
//! - BTreeSet<(Timestamp, Iteration)>: point-in-time lookups with a
//!   deterministic tie-break
//!
//! Every read holds exactly one shard guard for its duration, which gives
//! per-call snapshot consistency. Different subjects never contend.
//!
//! # Example
//!
//! ```
//! use vestige_core::{SubjectId, Timestamp};
//! use vestige_storage::{InMemoryStore, VersionStore};
//!
//! let store = InMemoryStore::new();
//! let subject = SubjectId::new();
//! store.append(subject, None, Timestamp::from_secs(1)).unwrap();
//! store.append(subject, Some("v2".into()), Timestamp::from_secs(2)).unwrap();
//!
//! let tagged = store.find_by_tag(subject, "v2").unwrap().unwrap();
//! assert_eq!(tagged.iteration().get(), 2);
//! ```

use crate::config::{StoreConfig, TieBreak};
use crate::error::{StoreError, StoreResult};
use crate::traits::{is_empty_span, Direction, VersionStore};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;
use std::sync::Arc;
use tracing::{debug, warn};
use vestige_core::{Iteration, NamedQuery, SubjectHandle, SubjectId, Timestamp, VersionEntry};

/// Custom named query: receives the subject's entries in ascending order
pub type NamedQueryFn = dyn Fn(&[VersionEntry]) -> Option<VersionEntry> + Send + Sync;

/// Per-subject shard holding one version history
#[derive(Debug)]
pub(crate) struct Shard {
    entries: BTreeMap<Iteration, VersionEntry>,
    tags: FxHashMap<String, Iteration>,
    times: BTreeSet<(Timestamp, Iteration)>,
    next_iteration: Iteration,
}

impl Shard {
    fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            tags: FxHashMap::default(),
            times: BTreeSet::new(),
            next_iteration: Iteration::FIRST,
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn latest(&self) -> Option<&VersionEntry> {
        self.entries.values().next_back()
    }

    fn check_insert(&self, entry: &VersionEntry) -> StoreResult<()> {
        let subject = entry.subject();
        let iteration = entry.iteration();

        if iteration == Iteration::default() {
            return Err(StoreError::InvalidIteration {
                subject,
                iteration,
                reason: "iterations start at 1".to_string(),
            });
        }
        if iteration < self.next_iteration || self.entries.contains_key(&iteration) {
            return Err(StoreError::InvalidIteration {
                subject,
                iteration,
                reason: format!("next free iteration is {}", self.next_iteration),
            });
        }
        if let Some(tag) = entry.tag() {
            if let Some(existing) = self.tags.get(tag) {
                return Err(StoreError::DuplicateTag {
                    subject,
                    tag: tag.to_string(),
                    existing: *existing,
                });
            }
        }
        if let Some(latest) = self.latest() {
            if entry.created_at() < latest.created_at() {
                return Err(StoreError::NonMonotonicTimestamp {
                    subject,
                    previous: latest.created_at(),
                    attempted: entry.created_at(),
                });
            }
        }
        Ok(())
    }

    fn insert(&mut self, entry: VersionEntry) {
        let iteration = entry.iteration();
        if let Some(tag) = entry.tag() {
            self.tags.insert(tag.to_string(), iteration);
        }
        self.times.insert((entry.created_at(), iteration));
        self.next_iteration = iteration.next().unwrap_or(Iteration::MAX);
        self.entries.insert(iteration, entry);
    }

    fn remove(&mut self, iteration: Iteration) -> Option<VersionEntry> {
        let entry = self.entries.remove(&iteration)?;
        if let Some(tag) = entry.tag() {
            self.tags.remove(tag);
        }
        self.times.remove(&(entry.created_at(), iteration));
        Some(entry)
    }

    fn last_created_at_or_before(&self, at: Timestamp, tie_break: TieBreak) -> Option<Iteration> {
        let (created_at, highest) = *self.times.range(..=(at, Iteration::MAX)).next_back()?;
        match tie_break {
            TieBreak::HighestIteration => Some(highest),
            TieBreak::LowestIteration => self
                .times
                .range((created_at, Iteration::default())..=(created_at, highest))
                .next()
                .map(|(_, iteration)| *iteration),
        }
    }
}

/// In-memory version store - DashMap by SubjectId, ordered maps within
///
/// # Thread Safety
///
/// All operations are thread-safe. Reads and writes lock only the target
/// subject's shard.
pub struct InMemoryStore {
    shards: DashMap<SubjectId, Shard>,
    named: RwLock<FxHashMap<String, Arc<NamedQueryFn>>>,
    config: StoreConfig,
}

impl InMemoryStore {
    /// Create an empty store with default configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with the given configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            shards: DashMap::new(),
            named: RwLock::new(FxHashMap::default()),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of subjects with a shard
    pub fn subject_count(&self) -> usize {
        self.shards.len()
    }

    /// Number of stored entries for a subject
    pub fn entry_count(&self, subject: SubjectId) -> usize {
        self.shards.get(&subject).map(|shard| shard.len()).unwrap_or(0)
    }

    /// Handle for a subject positioned at its latest iteration
    ///
    /// Returns `None` if the subject has no entries.
    pub fn subject(&self, subject: SubjectId) -> Option<SubjectHandle> {
        let shard = self.shards.get(&subject)?;
        let latest = shard.latest()?;
        Some(SubjectHandle::new(subject, latest.iteration()))
    }

    // ========================================================================
    // Write path
    // ========================================================================

    /// Append an entry at the next free iteration
    ///
    /// # Errors
    ///
    /// - `DuplicateTag` if the tag already names another entry
    /// - `NonMonotonicTimestamp` if `created_at` precedes the latest entry
    pub fn append(
        &self,
        subject: SubjectId,
        tag: Option<String>,
        created_at: Timestamp,
    ) -> StoreResult<VersionEntry> {
        self.write(subject, |shard| {
            let entry = VersionEntry::new(subject, shard.next_iteration, created_at);
            match tag {
                Some(tag) => entry.with_tag(tag),
                None => entry,
            }
        })
    }

    /// Append an entry created now
    pub fn append_now(&self, subject: SubjectId, tag: Option<String>) -> StoreResult<VersionEntry> {
        self.append(subject, tag, Timestamp::now())
    }

    /// Store a caller-built entry at its own iteration
    ///
    /// Gaps are allowed; going backwards is not.
    ///
    /// # Errors
    ///
    /// - `InvalidIteration` if the iteration is 0 or not above every
    ///   iteration already handed out
    /// - `DuplicateTag`, `NonMonotonicTimestamp` as for [`append`](Self::append)
    pub fn insert(&self, entry: VersionEntry) -> StoreResult<VersionEntry> {
        self.write(entry.subject(), |_| entry)
    }

    // A subject's shard only comes into existence with its first stored entry.
    fn write<F>(&self, subject: SubjectId, build: F) -> StoreResult<VersionEntry>
    where
        F: FnOnce(&Shard) -> VersionEntry,
    {
        match self.shards.entry(subject) {
            Entry::Occupied(mut occupied) => {
                let entry = build(occupied.get());
                Self::store(occupied.get_mut(), entry)
            }
            Entry::Vacant(vacant) => {
                let mut shard = Shard::new();
                let entry = build(&shard);
                let stored = Self::store(&mut shard, entry)?;
                vacant.insert(shard);
                Ok(stored)
            }
        }
    }

    fn store(shard: &mut Shard, entry: VersionEntry) -> StoreResult<VersionEntry> {
        if let Err(e) = shard.check_insert(&entry) {
            warn!(subject = %entry.subject(), iteration = %entry.iteration(), error = %e, "Rejected version entry");
            return Err(e);
        }
        debug!(
            subject = %entry.subject(),
            iteration = %entry.iteration(),
            tag = ?entry.tag(),
            "Stored version entry"
        );
        shard.insert(entry.clone());
        Ok(entry)
    }

    /// Remove every entry older than `iteration`
    ///
    /// Models retention pruning. Returns the number of removed entries.
    pub fn prune_before(&self, subject: SubjectId, iteration: Iteration) -> usize {
        let Some(mut shard) = self.shards.get_mut(&subject) else {
            return 0;
        };
        let doomed: Vec<Iteration> = shard.entries.range(..iteration).map(|(k, _)| *k).collect();
        for key in &doomed {
            shard.remove(*key);
        }
        debug!(subject = %subject, before = %iteration, removed = doomed.len(), "Pruned history");
        doomed.len()
    }

    /// Remove every entry newer than `iteration`
    ///
    /// Models a reset: the next append reuses `iteration + 1`. Returns the
    /// number of removed entries.
    pub fn truncate_after(&self, subject: SubjectId, iteration: Iteration) -> usize {
        let Some(mut shard) = self.shards.get_mut(&subject) else {
            return 0;
        };
        let doomed: Vec<Iteration> = shard
            .entries
            .range((Bound::Excluded(iteration), Bound::Unbounded))
            .map(|(k, _)| *k)
            .collect();
        for key in &doomed {
            shard.remove(*key);
        }
        let resume = iteration.next().unwrap_or(Iteration::MAX);
        if resume < shard.next_iteration {
            shard.next_iteration = resume;
        }
        debug!(subject = %subject, after = %iteration, removed = doomed.len(), "Truncated history");
        doomed.len()
    }

    /// Register a custom named query
    ///
    /// The query sees the subject's entries in ascending iteration order.
    /// Registering a name twice replaces the earlier query.
    pub fn register_named_query<F>(&self, name: impl Into<String>, query: F)
    where
        F: Fn(&[VersionEntry]) -> Option<VersionEntry> + Send + Sync + 'static,
    {
        self.named.write().insert(name.into(), Arc::new(query));
    }

    fn custom_query(&self, name: &str) -> Option<Arc<NamedQueryFn>> {
        self.named.read().get(name).cloned()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("subject_count", &self.subject_count())
            .field("named_queries", &self.named.read().len())
            .field("config", &self.config)
            .finish()
    }
}

impl VersionStore for InMemoryStore {
    fn find_by_iteration(
        &self,
        subject: SubjectId,
        iteration: Iteration,
    ) -> StoreResult<Option<VersionEntry>> {
        Ok(self
            .shards
            .get(&subject)
            .and_then(|shard| shard.entries.get(&iteration).cloned()))
    }

    fn find_by_tag(&self, subject: SubjectId, tag: &str) -> StoreResult<Option<VersionEntry>> {
        Ok(self.shards.get(&subject).and_then(|shard| {
            let iteration = shard.tags.get(tag)?;
            shard.entries.get(iteration).cloned()
        }))
    }

    fn last_created_at_or_before(
        &self,
        subject: SubjectId,
        at: Timestamp,
    ) -> StoreResult<Option<VersionEntry>> {
        Ok(self.shards.get(&subject).and_then(|shard| {
            let iteration = shard.last_created_at_or_before(at, self.config.tie_break)?;
            shard.entries.get(&iteration).cloned()
        }))
    }

    fn min_iteration(&self, subject: SubjectId) -> StoreResult<Option<Iteration>> {
        Ok(self
            .shards
            .get(&subject)
            .and_then(|shard| shard.entries.keys().next().copied()))
    }

    fn max_iteration(&self, subject: SubjectId) -> StoreResult<Option<Iteration>> {
        Ok(self
            .shards
            .get(&subject)
            .and_then(|shard| shard.entries.keys().next_back().copied()))
    }

    fn query_range(
        &self,
        subject: SubjectId,
        low: Bound<Iteration>,
        high: Bound<Iteration>,
        direction: Direction,
    ) -> StoreResult<Vec<VersionEntry>> {
        if is_empty_span(low, high) {
            return Ok(Vec::new());
        }
        let Some(shard) = self.shards.get(&subject) else {
            return Ok(Vec::new());
        };
        let range = shard.entries.range((low, high)).map(|(_, e)| e.clone());
        Ok(match direction {
            Direction::Ascending => range.collect(),
            Direction::Descending => range.rev().collect(),
        })
    }

    fn query_named(
        &self,
        subject: SubjectId,
        query: &NamedQuery,
    ) -> StoreResult<Option<VersionEntry>> {
        match query {
            NamedQuery::First => Ok(self
                .shards
                .get(&subject)
                .and_then(|shard| shard.entries.values().next().cloned())),
            NamedQuery::Last => Ok(self
                .shards
                .get(&subject)
                .and_then(|shard| shard.latest().cloned())),
            NamedQuery::Custom(name) => {
                let Some(custom) = self.custom_query(name) else {
                    debug!(subject = %subject, query = %name, "Unknown named query");
                    return Ok(None);
                };
                let entries: Vec<VersionEntry> = self
                    .shards
                    .get(&subject)
                    .map(|shard| shard.entries.values().cloned().collect())
                    .unwrap_or_default();
                Ok(custom(&entries))
            }
        }
    }
}
