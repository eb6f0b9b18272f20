//! Unified error type for session state.
//!
//! Store failures pass through untouched; the state layer only adds the
//! few failures it can detect itself (bad namespaces, bad configuration,
//! typed access that does not fit the stored value).

use session_state_core::StoreError;
use thiserror::Error;

/// All session-state errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Failure reported by the underlying session store, unchanged
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Namespace rejected (empty view name, or separator under strict mode)
    #[error("invalid namespace: {0}")]
    InvalidNamespace(String),

    /// Configuration could not be loaded or is inconsistent
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Typed access could not convert to or from a stored value
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for session-state operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error came from the underlying store.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }

    /// Check if this is a rejected namespace.
    pub fn is_invalid_namespace(&self) -> bool {
        matches!(self, Error::InvalidNamespace(_))
    }

    /// The store error, if this wraps one.
    pub fn as_store_error(&self) -> Option<&StoreError> {
        match self {
            Error::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::InvalidConfig(e.to_string())
    }
}
