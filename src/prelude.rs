//! Convenient imports for session-state.
//!
//! ```ignore
//! use session_state::prelude::*;
//!
//! let state = StateStore::new(MemoryStore::new());
//! state.set_in("profile", "name", "Alice")?;
//! ```

// Main entry point
pub use crate::state::{StateStore, StateStoreBuilder};
pub use crate::namespace::NamespaceView;
pub use crate::config::StateConfig;

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use crate::types::{SessionStore, StoreError, Value};

// Bundled stores
pub use crate::types::{MemoryStore, OrderedStore};
