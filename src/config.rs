//! State layer configuration.
//!
//! Configuration can be built in code or loaded from TOML:
//!
//! ```toml
//! separator = "_"
//! strict_namespaces = false
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use session_state_core::{KeyComposer, DEFAULT_SEPARATOR};

/// Settings for a [`StateStore`](crate::StateStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// Text placed between namespace and key in flat keys.
    pub separator: String,

    /// Reject namespaces that contain the separator.
    ///
    /// Off by default. When off, `("a_b", "c")` and `("a", "b_c")` share
    /// the flat key `"a_b_c"`.
    pub strict_namespaces: bool,
}

impl StateConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: StateConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for inconsistencies.
    pub fn validate(&self) -> Result<()> {
        match KeyComposer::checked(self.separator.as_str()) {
            Some(_) => Ok(()),
            None => Err(Error::InvalidConfig(
                "separator must not be empty".to_string(),
            )),
        }
    }

    /// Composer for this configuration's separator.
    pub(crate) fn composer(&self) -> KeyComposer {
        KeyComposer::new(self.separator.clone())
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            strict_namespaces: false,
        }
    }
}
