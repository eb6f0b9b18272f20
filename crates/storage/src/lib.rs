//! Storage layer for session-state
//!
//! In-memory [`SessionStore`](session_state_core::SessionStore)
//! implementations for hosts that have no store of their own, and for tests:
//! - MemoryStore: DashMap-based sharded store, unspecified key order
//! - OrderedStore: BTreeMap behind an RwLock, sorted key order
//!
//! Both expose an inherent `clear()` that empties the store in one call,
//! for hosts that need more than the state layer's snapshot-then-delete.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ordered;
pub mod sharded;

pub use ordered::OrderedStore;
pub use sharded::MemoryStore;
