//! Core types for session state
//!
//! This crate defines the pieces every other layer builds on:
//! - [`Value`]: what a session store holds
//! - [`KeyComposer`]: how `(namespace, key)` pairs become flat keys
//! - [`SessionStore`]: the contract a host-supplied store fulfils
//! - [`StoreError`]: failures a store may report

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod store;
pub mod value;

pub use error::{StoreError, StoreResult};
pub use key::{compose, KeyComposer, DEFAULT_SEPARATOR};
pub use store::SessionStore;
pub use value::Value;
