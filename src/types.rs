//! Public types for the session-state API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Value model
pub use session_state_core::Value;

// Key composition
pub use session_state_core::key::compose;
pub use session_state_core::{KeyComposer, DEFAULT_SEPARATOR};

// Store contract
pub use session_state_core::{SessionStore, StoreError, StoreResult};

// Bundled stores
pub use session_state_storage::{MemoryStore, OrderedStore};
