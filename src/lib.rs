//! # session-state
//!
//! Namespaced get-or-init state over a flat, host-owned session store.
//!
//! A host process usually has one flat key-value store per session. This
//! crate lets independent subsystems share it: keys are prefixed with a
//! namespace (`"profile"` + `"name"` becomes `"profile_name"`), and reads
//! initialize absent keys with a default so callers never check first.
//!
//! ## Quick Start
//!
//! ```ignore
//! use session_state::prelude::*;
//!
//! // The host supplies the store; a bundled in-memory one works too
//! let state = StateStore::new(MemoryStore::new());
//!
//! // Reading initializes
//! assert_eq!(state.get_or("counter", 0)?, Value::Int(0));
//! state.set("counter", 1)?;
//!
//! // Namespaces
//! let profile = state.create_namespace("profile")?;
//! profile.init("name", "")?;
//! profile.clear()?;
//! ```
//!
//! ## Layers
//!
//! - [`StateStore`] - the facade: get/init/set/delete/clear/enumerate
//! - [`NamespaceView`] - a `StateStore` with the namespace fixed
//! - [`KeyComposer`] - `(namespace, key)` to flat key
//! - [`SessionStore`] - the contract the host's store fulfils
//!
//! ## Collisions
//!
//! Prefix namespacing is ambiguous: `set_in("a", "b", ..)` and
//! `set("a_b", ..)` address the same flat key. This is kept as is; enable
//! [`StateConfig::strict_namespaces`] to refuse namespaces containing the
//! separator.

#![warn(missing_docs)]

mod config;
mod error;
mod namespace;
mod state;
mod types;

pub mod prelude;

// Re-export main entry points
pub use config::StateConfig;
pub use error::{Error, Result};
pub use namespace::NamespaceView;
pub use state::{StateStore, StateStoreBuilder};

// Re-export types
pub use types::*;
