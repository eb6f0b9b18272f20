//! Namespace-bound views.
//!
//! A [`NamespaceView`] fixes the namespace argument of every
//! [`StateStore`] operation, for call sites that work inside a single
//! namespace:
//!
//! ```ignore
//! let profile = state.create_namespace("profile")?;
//! profile.init("name", "")?;
//! profile.set("email", "alice@example.com")?;
//! profile.clear()?;
//! ```

use crate::error::{Error, Result};
use crate::state::StateStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use session_state_core::{SessionStore, Value};

/// A [`StateStore`] with its namespace fixed.
///
/// Holds a borrow of the state store and the namespace name, nothing else.
/// No operation takes a namespace argument and the namespace cannot be
/// changed after construction.
pub struct NamespaceView<'a, S> {
    state: &'a StateStore<S>,
    namespace: String,
}

impl<'a, S: SessionStore> NamespaceView<'a, S> {
    /// Bind `namespace` on `state`.
    ///
    /// An empty namespace is rejected: it would silently read and write
    /// un-namespaced keys.
    pub fn new(state: &'a StateStore<S>, namespace: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        if namespace.is_empty() {
            return Err(Error::InvalidNamespace(
                "namespace must not be empty".to_string(),
            ));
        }
        state.check_namespace(&namespace)?;
        Ok(Self { state, namespace })
    }

    /// The bound namespace.
    pub fn name(&self) -> &str {
        &self.namespace
    }

    /// Check if a key is present in this namespace.
    pub fn exists(&self, key: &str) -> Result<bool> {
        self.state.exists_in(&self.namespace, key)
    }

    /// Initialize a key with `default` if it is absent.
    pub fn init(&self, key: &str, default: impl Into<Value>) -> Result<Value> {
        self.state.init_in(&self.namespace, key, default)
    }

    /// Get a value, initializing it to `Value::Null` if absent.
    pub fn get(&self, key: &str) -> Result<Value> {
        self.state.get_in(&self.namespace, key)
    }

    /// Get a value, initializing it to `default` if absent.
    pub fn get_or(&self, key: &str, default: impl Into<Value>) -> Result<Value> {
        self.state.get_or_in(&self.namespace, key, default)
    }

    /// Set a value in this namespace.
    pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<()> {
        self.state.set_in(&self.namespace, key, value)
    }

    /// Delete a key. Returns `true` if it existed.
    pub fn delete(&self, key: &str) -> Result<bool> {
        self.state.delete_in(&self.namespace, key)
    }

    /// Flat keys of this namespace, in store order.
    pub fn keys(&self) -> Result<Vec<String>> {
        self.state.keys_in(&self.namespace)
    }

    /// Remove every key of this namespace. Returns the number removed.
    pub fn clear(&self) -> Result<usize> {
        self.state.clear_namespace(&self.namespace)
    }

    /// Read a value and deserialize it into `T`, without initializing.
    pub fn read_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.state.read_as_in(&self.namespace, key)
    }

    /// Serialize `value` and store it.
    pub fn set_as<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        self.state.set_as_in(&self.namespace, key, value)
    }
}

impl<S> Clone for NamespaceView<'_, S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            namespace: self.namespace.clone(),
        }
    }
}

impl<S> std::fmt::Debug for NamespaceView<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamespaceView")
            .field("namespace", &self.namespace)
            .finish()
    }
}
