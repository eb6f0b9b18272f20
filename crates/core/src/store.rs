//! The session store contract
//!
//! A session store is the flat, host-owned map that session state lives
//! in. The host decides how it is created, persisted and isolated per
//! session; this crate only needs presence checks, reads, writes, deletes
//! and a key listing.
//!
//! All methods take `&self`. Stores shared between collaborators use
//! interior mutability (see the storage crate for `DashMap` and `RwLock`
//! backed implementations).

use crate::error::StoreResult;
use crate::value::Value;
use std::sync::Arc;

/// A flat, mutable key-value map supplied by the host
///
/// # Requirements
///
/// - A single reader/writer sees its own writes immediately
/// - `keys` returns a snapshot; it must not hold locks after returning
/// - Removing an absent key is not an error
///
/// No ordering or cross-writer guarantees are required.
pub trait SessionStore: Send + Sync {
    /// Check whether `key` is present
    fn contains(&self, key: &str) -> StoreResult<bool>;

    /// Read the value under `key`
    fn read(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Insert or overwrite the value under `key`
    fn write(&self, key: &str, value: Value) -> StoreResult<()>;

    /// Remove `key`, returning its previous value if it had one
    fn remove(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Snapshot of every key currently present, in store order
    fn keys(&self) -> StoreResult<Vec<String>>;

    /// Return the value under `key`, writing `default` first if absent
    ///
    /// Performs at most one write. The provided implementation is a
    /// read followed by a write; backends with an entry API should
    /// override it.
    fn read_or_insert(&self, key: &str, default: Value) -> StoreResult<Value> {
        match self.read(key)? {
            Some(existing) => Ok(existing),
            None => {
                self.write(key, default.clone())?;
                Ok(default)
            }
        }
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn contains(&self, key: &str) -> StoreResult<bool> {
        (**self).contains(key)
    }

    fn read(&self, key: &str) -> StoreResult<Option<Value>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: Value) -> StoreResult<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<Option<Value>> {
        (**self).remove(key)
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        (**self).keys()
    }

    fn read_or_insert(&self, key: &str, default: Value) -> StoreResult<Value> {
        (**self).read_or_insert(key, default)
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Box<S> {
    fn contains(&self, key: &str) -> StoreResult<bool> {
        (**self).contains(key)
    }

    fn read(&self, key: &str) -> StoreResult<Option<Value>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: Value) -> StoreResult<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<Option<Value>> {
        (**self).remove(key)
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        (**self).keys()
    }

    fn read_or_insert(&self, key: &str, default: Value) -> StoreResult<Value> {
        (**self).read_or_insert(key, default)
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn contains(&self, key: &str) -> StoreResult<bool> {
        (**self).contains(key)
    }

    fn read(&self, key: &str) -> StoreResult<Option<Value>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: Value) -> StoreResult<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<Option<Value>> {
        (**self).remove(key)
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        (**self).keys()
    }

    fn read_or_insert(&self, key: &str, default: Value) -> StoreResult<Value> {
        (**self).read_or_insert(key, default)
    }
}
