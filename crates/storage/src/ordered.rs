//! Ordered in-memory session store
//!
//! BTreeMap behind a parking_lot RwLock. Enumerates keys in ascending
//! order, which makes listings reproducible for hosts that display them.

use parking_lot::RwLock;
use session_state_core::{SessionStore, StoreResult, Value};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::debug;

/// Session store with sorted key enumeration
#[derive(Default)]
pub struct OrderedStore {
    data: RwLock<BTreeMap<String, Value>>,
}

impl OrderedStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys present
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Check if the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Drop every entry under a single write lock
    pub fn clear(&self) -> usize {
        let mut data = self.data.write();
        let removed = data.len();
        data.clear();
        debug!(removed, "ordered store cleared");
        removed
    }
}

impl SessionStore for OrderedStore {
    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.data.read().contains_key(key))
    }

    fn read(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: Value) -> StoreResult<()> {
        self.data.write().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.data.write().remove(key))
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.data.read().keys().cloned().collect())
    }

    fn read_or_insert(&self, key: &str, default: Value) -> StoreResult<Value> {
        let mut data = self.data.write();
        match data.entry(key.to_string()) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                debug!(key, default = default.type_name(), "initialized absent key");
                Ok(entry.insert(default).clone())
            }
        }
    }
}

impl FromIterator<(String, Value)> for OrderedStore {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            data: RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl std::fmt::Debug for OrderedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderedStore")
            .field("len", &self.len())
            .finish()
    }
}
