//! Layered configuration loading.
//!
//! # Design
//! - Sources are applied in registration order; later sources override earlier
//!   ones key by key.
//! - JSON documents flatten into hierarchical keys (`Section:Key`, arrays use
//!   their index as a segment).
//! - Optional files that do not exist contribute nothing; every other failure
//!   aborts the build.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::model::Configuration;
use crate::path::{join_key, normalize_key};

/// A single layer feeding the configuration snapshot.
#[derive(Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// JSON document on disk.
    JsonFile {
        /// Location of the document.
        path: PathBuf,
        /// Whether a missing file is tolerated.
        optional: bool,
    },
    /// Key/value pairs supplied by the caller.
    InMemory {
        /// Pairs keyed by hierarchical path.
        values: Vec<(String, String)>,
    },
}

impl ConfigSource {
    fn load(&self) -> ConfigResult<BTreeMap<String, String>> {
        match self {
            Self::JsonFile { path, optional } => load_json_file(path, *optional),
            Self::InMemory { values } => Ok(values
                .iter()
                .map(|(key, value)| (normalize_key(key), value.clone()))
                .collect()),
        }
    }
}

impl fmt::Debug for ConfigSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JsonFile { path, optional } => formatter
                .debug_struct("JsonFile")
                .field("path", path)
                .field("optional", optional)
                .finish(),
            Self::InMemory { values } => formatter
                .debug_struct("InMemory")
                .field("keys", &values.len())
                .finish(),
        }
    }
}

/// Builder collecting sources before producing an immutable [`Configuration`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    sources: Vec<ConfigSource>,
}

impl ConfigBuilder {
    /// Start with no sources.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Append a JSON file source.
    #[must_use]
    pub fn add_json_file(mut self, path: impl Into<PathBuf>, optional: bool) -> Self {
        self.sources.push(ConfigSource::JsonFile {
            path: path.into(),
            optional,
        });
        self
    }

    /// Append an in-memory source.
    #[must_use]
    pub fn add_in_memory<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.sources.push(ConfigSource::InMemory { values });
        self
    }

    /// Sources registered so far, in application order.
    #[must_use]
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Read every source and merge them into a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is unreadable, or if any file that
    /// exists is not a JSON object.
    pub fn build(&self) -> ConfigResult<Configuration> {
        let mut config = Configuration::default();
        for source in &self.sources {
            config.merge(source.load()?);
        }
        debug!(
            sources = self.sources.len(),
            keys = config.len(),
            "configuration snapshot built"
        );
        Ok(config)
    }
}

fn load_json_file(path: &Path, optional: bool) -> ConfigResult<BTreeMap<String, String>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if optional && err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "optional configuration file not found");
            return Ok(BTreeMap::new());
        }
        Err(source) => {
            return Err(ConfigError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let document: Value =
        serde_json::from_str(&contents).map_err(|source| ConfigError::SourceMalformed {
            path: path.to_path_buf(),
            source,
        })?;
    if !document.is_object() {
        return Err(ConfigError::RootNotObject {
            path: path.to_path_buf(),
        });
    }

    let mut values = BTreeMap::new();
    flatten_into("", &document, &mut values);
    debug!(path = %path.display(), keys = values.len(), "loaded configuration file");
    Ok(values)
}

fn flatten_into(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(&join_key(prefix, key), nested, out);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                flatten_into(&join_key(prefix, &index.to_string()), nested, out);
            }
        }
        Value::String(text) => {
            out.insert(normalize_key(prefix), text.clone());
        }
        Value::Null => {
            out.insert(normalize_key(prefix), String::new());
        }
        Value::Bool(_) | Value::Number(_) => {
            out.insert(normalize_key(prefix), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flatten_handles_nesting_arrays_and_scalars() {
        let document = json!({
            "Data": {
                "DefaultConnection": { "ConnectionString": "Server=db" }
            },
            "Authentication": {
                "Providers": ["Microsoft", "Google"]
            },
            "WebsiteOptions": { "ShowWelcomePage": true, "MaxItems": 12, "Banner": null }
        });
        let mut values = BTreeMap::new();
        flatten_into("", &document, &mut values);

        assert_eq!(
            values.get("data:defaultconnection:connectionstring").map(String::as_str),
            Some("Server=db")
        );
        assert_eq!(
            values.get("authentication:providers:1").map(String::as_str),
            Some("Google")
        );
        assert_eq!(
            values.get("websiteoptions:showwelcomepage").map(String::as_str),
            Some("true")
        );
        assert_eq!(
            values.get("websiteoptions:maxitems").map(String::as_str),
            Some("12")
        );
        assert_eq!(
            values.get("websiteoptions:banner").map(String::as_str),
            Some("")
        );
    }

    #[test]
    fn in_memory_layers_override_in_order() -> ConfigResult<()> {
        let config = ConfigBuilder::new()
            .add_in_memory([("Keys:ApplicationInsights:InstrumentationKey", "first")])
            .add_in_memory([("keys:applicationinsights:instrumentationkey", "second")])
            .build()?;
        assert_eq!(
            config.lookup("Keys:ApplicationInsights:InstrumentationKey"),
            Some("second")
        );
        Ok(())
    }

    #[test]
    fn missing_optional_file_is_skipped() -> ConfigResult<()> {
        let builder =
            ConfigBuilder::new().add_json_file("/definitely/missing/config.json", true);
        assert_eq!(builder.sources().len(), 1);
        let config = builder.build()?;
        assert!(config.is_empty());
        Ok(())
    }

    #[test]
    fn missing_required_file_is_fatal() {
        let result = ConfigBuilder::new()
            .add_json_file("/definitely/missing/config.json", false)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::SourceUnavailable { ref path, .. })
                if path == Path::new("/definitely/missing/config.json")
        ));
    }
}
