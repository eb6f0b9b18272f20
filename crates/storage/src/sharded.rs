//! Sharded in-memory session store
//!
//! DashMap keyed by flat key, FxHash for hashing.
//! Lock-free reads, sharded writes, O(1) lookups.
//!
//! # Design
//!
//! - DashMap: 16-way sharded by default, lock-free reads
//! - FxHash: fast non-crypto hash, keys are host-controlled strings
//! - Enumeration order is whatever the shards yield (unspecified)
//!
//! Iterating a DashMap holds shard read locks, so removing entries while
//! iterating deadlocks. `keys()` always returns an owned snapshot, which
//! is what the state layer's bulk clears delete against.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxHasher;
use session_state_core::{SessionStore, StoreResult, Value};
use std::hash::BuildHasherDefault;
use tracing::debug;

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Sharded in-memory session store
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - read(): Lock-free read via DashMap
/// - write(): Only locks the target shard
/// - read_or_insert(): Single entry operation on one shard
///
/// # Example
///
/// ```ignore
/// use session_state_storage::MemoryStore;
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryStore::new());
/// let state = session_state::StateStore::new(Arc::clone(&store));
/// ```
pub struct MemoryStore {
    data: DashMap<String, Value, FxBuildHasher>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            data: DashMap::with_hasher(FxBuildHasher::default()),
        }
    }

    /// Create with expected number of keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: DashMap::with_capacity_and_hasher(capacity, FxBuildHasher::default()),
        }
    }

    /// Number of keys present
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drop every entry in one call
    ///
    /// Each shard is cleared under its write lock. A writer racing with
    /// this call may land before or after its shard is cleared.
    pub fn clear(&self) -> usize {
        let removed = self.data.len();
        self.data.clear();
        debug!(removed, "memory store cleared");
        removed
    }
}

impl SessionStore for MemoryStore {
    #[inline]
    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.data.contains_key(key))
    }

    #[inline]
    fn read(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.data.get(key).map(|entry| entry.value().clone()))
    }

    #[inline]
    fn write(&self, key: &str, value: Value) -> StoreResult<()> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    #[inline]
    fn remove(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.data.remove(key).map(|(_, value)| value))
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.data.iter().map(|entry| entry.key().clone()).collect())
    }

    fn read_or_insert(&self, key: &str, default: Value) -> StoreResult<Value> {
        // Hot path: key already present, no allocation for the key
        if let Some(existing) = self.data.get(key) {
            return Ok(existing.value().clone());
        }
        match self.data.entry(key.to_string()) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                debug!(key, default = default.type_name(), "initialized absent key");
                Ok(entry.insert(default).value().clone())
            }
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(String, Value)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let store = MemoryStore::new();
        for (key, value) in iter {
            store.data.insert(key, value);
        }
        store
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("len", &self.len())
            .finish()
    }
}
