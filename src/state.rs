//! Namespaced state over a session store.
//!
//! [`StateStore`] is the facade hosts use. It owns a handle to the
//! host's [`SessionStore`] and routes every call through a
//! [`KeyComposer`], so that independent subsystems can share one flat
//! store without stepping on each other's keys.
//!
//! # Example
//!
//! ```ignore
//! use session_state::prelude::*;
//!
//! let state = StateStore::new(MemoryStore::new());
//!
//! // Simple operations (no namespace)
//! let count = state.get_or("counter", 0)?;
//! state.set("counter", 1)?;
//!
//! // Namespaced operations
//! state.set_in("profile", "name", "Alice")?;
//!
//! // Bound view
//! let profile = state.create_namespace("profile")?;
//! profile.init("email", "")?;
//! ```
//!
//! ## Progressive Disclosure
//!
//! 1. **Simple** - No namespace: `state.set("key", value)`
//! 2. **Namespaced** - Explicit namespace: `state.set_in("ns", "key", value)`
//! 3. **Bound** - Namespace fixed once: `state.create_namespace("ns")?.set("key", value)`
//!
//! ## Reading initializes
//!
//! `get` and `init` are the same operation: if the key is absent, the
//! default is written and returned. A later call with a different default
//! returns the stored value. `exists` and `read_as` are the only reads
//! without side effects.
//!
//! ## Bulk clears are not atomic
//!
//! `clear_namespace` and `clear_all` snapshot the key set and then delete
//! the snapshot. Keys written by another actor after the snapshot survive,
//! even for `clear_all`. Hosts needing an atomic clear should use their
//! store's own primitive (both bundled stores have `clear()`).

use crate::config::StateConfig;
use crate::error::{Error, Result};
use crate::namespace::NamespaceView;
use serde::de::DeserializeOwned;
use serde::Serialize;
use session_state_core::{KeyComposer, SessionStore, Value};
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

/// Namespaced get-or-init state over a host-supplied session store.
///
/// `S` is the store handle: an owned store, `Arc<T>`, or `&T`. The
/// facade holds no values of its own; every call reads or writes the
/// store directly.
pub struct StateStore<S> {
    store: S,
    composer: KeyComposer,
    config: StateConfig,
}

impl<S: SessionStore> StateStore<S> {
    /// Wrap a session store with the default configuration.
    pub fn new(store: S) -> Self {
        let config = StateConfig::default();
        Self {
            store,
            composer: config.composer(),
            config,
        }
    }

    /// Wrap a session store with an explicit configuration.
    pub fn with_config(store: S, config: StateConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            composer: config.composer(),
            config,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &StateConfig {
        &self.config
    }

    /// The composer used to build flat keys.
    pub fn composer(&self) -> &KeyComposer {
        &self.composer
    }

    /// The underlying session store.
    pub fn session_store(&self) -> &S {
        &self.store
    }

    /// Give back the session store handle.
    pub fn into_inner(self) -> S {
        self.store
    }

    // =========================================================================
    // Simple API (no namespace)
    // =========================================================================

    /// Check if a key is present. No side effects.
    pub fn exists(&self, key: &str) -> Result<bool> {
        self.exists_at(None, key)
    }

    /// Initialize a key with `default` if it is absent.
    ///
    /// Returns the value now stored: the existing one, or `default`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// assert_eq!(state.init("counter", 0)?, Value::Int(0));
    /// assert_eq!(state.init("counter", 99)?, Value::Int(0));
    /// ```
    pub fn init(&self, key: &str, default: impl Into<Value>) -> Result<Value> {
        self.init_at(None, key, default.into())
    }

    /// Get a value, initializing it to `Value::Null` if absent.
    pub fn get(&self, key: &str) -> Result<Value> {
        self.init_at(None, key, Value::Null)
    }

    /// Get a value, initializing it to `default` if absent.
    ///
    /// Same operation as [`init`](Self::init).
    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Result<Value> {
        self.init_at(None, key, default.into())
    }

    /// Set a value, overwriting any previous one.
    pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<()> {
        self.set_at(None, key, value.into())
    }

    /// Delete a key.
    ///
    /// Returns `true` if the key existed. Deleting an absent key is a
    /// no-op, not an error.
    pub fn delete(&self, key: &str) -> Result<bool> {
        self.delete_at(None, key)
    }

    /// List every flat key in the store, in store order.
    pub fn keys(&self) -> Result<Vec<String>> {
        self.keys_at(None)
    }

    // =========================================================================
    // Namespaced API
    // =========================================================================

    /// Check if a key is present in `namespace`.
    pub fn exists_in(&self, namespace: &str, key: &str) -> Result<bool> {
        self.exists_at(Some(namespace), key)
    }

    /// Initialize a key in `namespace` with `default` if it is absent.
    pub fn init_in(&self, namespace: &str, key: &str, default: impl Into<Value>) -> Result<Value> {
        self.init_at(Some(namespace), key, default.into())
    }

    /// Get a value from `namespace`, initializing it to `Value::Null` if absent.
    pub fn get_in(&self, namespace: &str, key: &str) -> Result<Value> {
        self.init_at(Some(namespace), key, Value::Null)
    }

    /// Get a value from `namespace`, initializing it to `default` if absent.
    pub fn get_or_in(
        &self,
        namespace: &str,
        key: &str,
        default: impl Into<Value>,
    ) -> Result<Value> {
        self.init_at(Some(namespace), key, default.into())
    }

    /// Set a value in `namespace`.
    pub fn set_in(&self, namespace: &str, key: &str, value: impl Into<Value>) -> Result<()> {
        self.set_at(Some(namespace), key, value.into())
    }

    /// Delete a key from `namespace`. Returns `true` if the key existed.
    pub fn delete_in(&self, namespace: &str, key: &str) -> Result<bool> {
        self.delete_at(Some(namespace), key)
    }

    /// List the flat keys of `namespace`, in store order.
    ///
    /// Keys are returned in flat form (`"profile_name"`, not `"name"`).
    /// An empty namespace lists every key, like [`keys`](Self::keys).
    pub fn keys_in(&self, namespace: &str) -> Result<Vec<String>> {
        self.keys_at(Some(namespace))
    }

    // =========================================================================
    // Typed access
    // =========================================================================

    /// Read a value and deserialize it into `T`, without initializing.
    ///
    /// Returns `None` if the key is absent.
    pub fn read_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.read_as_at(None, key)
    }

    /// Read a value from `namespace` and deserialize it into `T`.
    pub fn read_as_in<T: DeserializeOwned>(&self, namespace: &str, key: &str) -> Result<Option<T>> {
        self.read_as_at(Some(namespace), key)
    }

    /// Serialize `value` and store it.
    pub fn set_as<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        self.set_at(None, key, to_value(value)?)
    }

    /// Serialize `value` and store it in `namespace`.
    pub fn set_as_in<T: Serialize + ?Sized>(
        &self,
        namespace: &str,
        key: &str,
        value: &T,
    ) -> Result<()> {
        self.set_at(Some(namespace), key, to_value(value)?)
    }

    // =========================================================================
    // Bulk operations
    // =========================================================================

    /// Remove every key of `namespace`.
    ///
    /// Matches flat keys starting with `namespace + separator`, so
    /// clearing `"a"` leaves `"ab_z"` alone. Returns the number of keys
    /// removed.
    pub fn clear_namespace(&self, namespace: &str) -> Result<usize> {
        self.check_namespace(namespace)?;

        let prefix = self.composer.prefix(namespace);
        let targets: Vec<String> = self
            .store
            .keys()?
            .into_iter()
            .filter(|flat| flat.starts_with(&prefix))
            .collect();

        let removed = self.remove_all(&targets)?;
        debug!(namespace, matched = targets.len(), removed, "cleared namespace");
        Ok(removed)
    }

    /// Remove every key in the store, namespaced or not.
    ///
    /// Snapshots the key set first, then deletes it. Returns the number of
    /// keys removed.
    pub fn clear_all(&self) -> Result<usize> {
        let snapshot = self.store.keys()?;
        let removed = self.remove_all(&snapshot)?;

        if removed < snapshot.len() {
            warn!(
                "clear_all removed {} of {} snapshotted keys; others were removed concurrently",
                removed,
                snapshot.len()
            );
        }
        debug!(removed, "cleared all keys");
        Ok(removed)
    }

    /// Namespaces that appear to be in use.
    ///
    /// Built from the current keys: every key containing the separator
    /// contributes the text before its first separator. This is a guess.
    /// An un-namespaced key `"user_id"` reports namespace `"user"`, and a
    /// namespace `"a_b"` reports as `"a"`.
    pub fn namespaces(&self) -> Result<BTreeSet<String>> {
        Ok(self
            .store
            .keys()?
            .iter()
            .filter_map(|flat| self.composer.namespace_of(flat))
            .map(str::to_string)
            .collect())
    }

    /// Create a view bound to `namespace`.
    ///
    /// Fails with [`Error::InvalidNamespace`] if `namespace` is empty, or
    /// contains the separator while strict namespaces are enabled.
    pub fn create_namespace(&self, namespace: impl Into<String>) -> Result<NamespaceView<'_, S>> {
        NamespaceView::new(self, namespace)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    pub(crate) fn check_namespace(&self, namespace: &str) -> Result<()> {
        if self.config.strict_namespaces && self.composer.is_ambiguous(namespace) {
            return Err(Error::InvalidNamespace(format!(
                "'{}' contains the separator '{}'",
                namespace,
                self.composer.separator()
            )));
        }
        Ok(())
    }

    fn flat_key(&self, namespace: Option<&str>, key: &str) -> Result<String> {
        if let Some(ns) = namespace {
            self.check_namespace(ns)?;
        }
        Ok(self.composer.compose(namespace, key))
    }

    fn exists_at(&self, namespace: Option<&str>, key: &str) -> Result<bool> {
        let flat = self.flat_key(namespace, key)?;
        trace!(key = %flat, "exists");
        Ok(self.store.contains(&flat)?)
    }

    fn init_at(&self, namespace: Option<&str>, key: &str, default: Value) -> Result<Value> {
        let flat = self.flat_key(namespace, key)?;
        trace!(key = %flat, default = default.type_name(), "get or init");
        Ok(self.store.read_or_insert(&flat, default)?)
    }

    fn set_at(&self, namespace: Option<&str>, key: &str, value: Value) -> Result<()> {
        let flat = self.flat_key(namespace, key)?;
        trace!(key = %flat, "set");
        Ok(self.store.write(&flat, value)?)
    }

    fn delete_at(&self, namespace: Option<&str>, key: &str) -> Result<bool> {
        let flat = self.flat_key(namespace, key)?;
        trace!(key = %flat, "delete");
        Ok(self.store.remove(&flat)?.is_some())
    }

    fn keys_at(&self, namespace: Option<&str>) -> Result<Vec<String>> {
        let keys = self.store.keys()?;
        match namespace {
            Some(ns) if !ns.is_empty() => {
                self.check_namespace(ns)?;
                let prefix = self.composer.prefix(ns);
                Ok(keys
                    .into_iter()
                    .filter(|flat| flat.starts_with(&prefix))
                    .collect())
            }
            _ => Ok(keys),
        }
    }

    fn read_as_at<T: DeserializeOwned>(&self, namespace: Option<&str>, key: &str) -> Result<Option<T>> {
        let flat = self.flat_key(namespace, key)?;
        match self.store.read(&flat)? {
            Some(value) => Ok(Some(serde_json::from_value(serde_json::Value::from(value))?)),
            None => Ok(None),
        }
    }

    fn remove_all(&self, flat_keys: &[String]) -> Result<usize> {
        let mut removed = 0;
        for flat in flat_keys {
            if self.store.remove(flat)?.is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

impl<S: SessionStore + Default> Default for StateStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for StateStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore")
            .field("store", &self.store)
            .field("config", &self.config)
            .finish()
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(Value::from(serde_json::to_value(value)?))
}

/// Builder for a configured [`StateStore`].
///
/// # Example
///
/// ```ignore
/// // Parity with plain prefix namespacing
/// let state = StateStoreBuilder::new().build(MemoryStore::new())?;
///
/// // Refuse namespaces that could collide
/// let state = StateStoreBuilder::new()
///     .strict_namespaces(true)
///     .build(MemoryStore::new())?;
///
/// // From a config file's contents
/// let state = StateStoreBuilder::new()
///     .config(StateConfig::from_toml_str(&text)?)
///     .build(store)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct StateStoreBuilder {
    config: StateConfig,
}

impl StateStoreBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: StateConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the namespace separator (default `"_"`).
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Reject namespaces containing the separator.
    pub fn strict_namespaces(mut self, strict: bool) -> Self {
        self.config.strict_namespaces = strict;
        self
    }

    /// Build the state store over `store`.
    pub fn build<S: SessionStore>(self, store: S) -> Result<StateStore<S>> {
        StateStore::with_config(store, self.config)
    }
}
