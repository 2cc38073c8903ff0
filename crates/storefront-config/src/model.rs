//! Immutable configuration snapshot and section views.
//!
//! # Design
//! - A snapshot is built once and never mutated; it is shared read-only.
//! - Blank values read as missing so callers only ever branch on `Option`.
//! - Sections carry their own subset so they can be handed to consumers
//!   without exposing the rest of the configuration.

use std::collections::BTreeMap;
use std::fmt;

use crate::path::{join_key, normalize_key, strip_section};

/// Flattened key/value snapshot produced by [`crate::ConfigBuilder`].
///
/// `Debug` output lists key counts only; values routinely hold secrets.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    values: BTreeMap<String, String>,
}

impl Configuration {
    /// Build a snapshot directly from key/value pairs; later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values = BTreeMap::new();
        for (key, value) in pairs {
            values.insert(normalize_key(key.as_ref()), value.into());
        }
        Self { values }
    }

    pub(crate) fn merge(&mut self, layer: BTreeMap<String, String>) {
        self.values.extend(layer);
    }

    /// Look up a non-blank value by key path.
    ///
    /// Absent keys and values that are empty or whitespace both yield `None`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.raw(key).filter(|value| !value.trim().is_empty())
    }

    /// Look up the stored value verbatim, including blank values.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(&normalize_key(key)).map(String::as_str)
    }

    /// Extract the subset of keys living under `path`.
    #[must_use]
    pub fn section(&self, path: &str) -> ConfigSection {
        let prefix = normalize_key(path);
        let values = self
            .values
            .iter()
            .filter_map(|(key, value)| {
                strip_section(key, &prefix).map(|rest| (rest.to_string(), value.clone()))
            })
            .collect();
        ConfigSection {
            path: path.to_string(),
            values: Self { values },
        }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the snapshot holds no keys at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Configuration")
            .field("keys", &self.values.len())
            .finish()
    }
}

/// Owned view over one hierarchical section of a [`Configuration`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSection {
    path: String,
    values: Configuration,
}

impl ConfigSection {
    /// Absolute key path of the section.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Look up a non-blank value relative to the section.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.values.lookup(key)
    }

    /// Nested section relative to this one.
    #[must_use]
    pub fn section(&self, path: &str) -> Self {
        let nested = self.values.section(path);
        Self {
            path: join_key(&self.path, path),
            values: nested.values,
        }
    }

    /// Whether any key is stored under the section.
    #[must_use]
    pub fn has_values(&self) -> bool {
        !self.values.is_empty()
    }

    /// The section's keys as a standalone snapshot.
    #[must_use]
    pub const fn as_configuration(&self) -> &Configuration {
        &self.values
    }
}
