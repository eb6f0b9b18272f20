//! Errors raised by session store backends
//!
//! The state layer defines no failure modes of its own for store access:
//! whatever a backend reports here reaches the caller unchanged.
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | Unavailable | Store cannot be reached (session gone, backend down) |
//! | Rejected | Store refused a specific key or value |
//! | Serialization | Value could not be encoded for storage |
//! | Backend | Any other backend-specific failure |

use thiserror::Error;

/// Failure reported by a [`SessionStore`](crate::SessionStore) implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store cannot be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store refused to hold a key or value
    #[error("store rejected key '{key}': {reason}")]
    Rejected {
        /// Flat key the operation targeted
        key: String,
        /// Backend-provided reason
        reason: String,
    },

    /// The value could not be encoded by the store
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Backend-specific failure
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Build a `Rejected` error for `key`
    pub fn rejected(key: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::Rejected {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Check if the store itself is unreachable
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

/// Result type for session store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
