//! Flat key composition
//!
//! A session store is a single flat map. Namespacing is a naming
//! convention applied on top of it:
//!
//! ```text
//! namespace = "profile", key = "name"  ->  "profile_name"
//! namespace = None,      key = "name"  ->  "name"
//! ```
//!
//! Composition is lossy. `("a", "b")` and `(None, "a_b")` both produce
//! `"a_b"`, and nothing in the flat key records which call wrote it. Code
//! that works back from flat keys to namespaces ([`KeyComposer::namespace_of`])
//! is therefore a heuristic.

/// Separator placed between namespace and local key
pub const DEFAULT_SEPARATOR: &str = "_";

/// Compose a flat key with the default separator
///
/// An empty namespace behaves like no namespace.
///
/// # Examples
///
/// ```
/// use session_state_core::key::compose;
///
/// assert_eq!(compose(Some("profile"), "name"), "profile_name");
/// assert_eq!(compose(None, "name"), "name");
/// assert_eq!(compose(Some(""), "name"), "name");
/// ```
pub fn compose(namespace: Option<&str>, key: &str) -> String {
    KeyComposer::default().compose(namespace, key)
}

/// Maps `(namespace, key)` pairs to flat keys and back
///
/// Holds only the separator; every method is pure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyComposer {
    separator: String,
}

impl KeyComposer {
    /// Create a composer with a custom separator
    ///
    /// An empty separator is accepted but degenerate: `compose` glues
    /// namespace and key together, every key of `"a"` also falls under
    /// `prefix("")`, and `namespace_of` returns `Some("")` for any key.
    /// `StateConfig::validate` refuses it; use [`KeyComposer::checked`]
    /// to refuse it here.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Create a composer, or `None` if `separator` is empty
    pub fn checked(separator: impl Into<String>) -> Option<Self> {
        let separator = separator.into();
        if separator.is_empty() {
            None
        } else {
            Some(Self { separator })
        }
    }

    /// The separator in use
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Compose the flat key for `key` under `namespace`
    pub fn compose(&self, namespace: Option<&str>, key: &str) -> String {
        match namespace {
            Some(ns) if !ns.is_empty() => {
                let mut flat = String::with_capacity(ns.len() + self.separator.len() + key.len());
                flat.push_str(ns);
                flat.push_str(&self.separator);
                flat.push_str(key);
                flat
            }
            _ => key.to_string(),
        }
    }

    /// Prefix shared by every flat key in `namespace`
    ///
    /// Always `namespace + separator`, including for the empty namespace.
    /// A flat key falls under `namespace` when it starts with this prefix,
    /// so `"ab_z"` is not in namespace `"a"`.
    pub fn prefix(&self, namespace: &str) -> String {
        format!("{}{}", namespace, self.separator)
    }

    /// Guess the namespace of a flat key
    ///
    /// Returns the text before the first separator, or `None` if the key
    /// holds no separator. Wrong for un-namespaced keys that contain the
    /// separator and for namespaces that contain it themselves.
    pub fn namespace_of<'k>(&self, flat_key: &'k str) -> Option<&'k str> {
        flat_key
            .split_once(self.separator.as_str())
            .map(|(ns, _)| ns)
    }

    /// Check whether a namespace contains the separator
    ///
    /// Such namespaces can collide with other namespaces' keys.
    pub fn is_ambiguous(&self, namespace: &str) -> bool {
        namespace.contains(self.separator.as_str())
    }
}

impl Default for KeyComposer {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}
