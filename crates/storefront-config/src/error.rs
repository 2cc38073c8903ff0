//! Error types for configuration loading.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures raised while building a configuration snapshot.
///
/// Every variant is fatal: a snapshot is either built from all of its sources
/// or not at all.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required source could not be read.
    #[error("configuration source unavailable")]
    SourceUnavailable {
        /// Path of the source file.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
    /// A source was read but did not contain valid JSON.
    #[error("configuration source is not valid json")]
    SourceMalformed {
        /// Path of the source file.
        path: PathBuf,
        /// Source parse error.
        source: serde_json::Error,
    },
    /// A source parsed but its root value was not an object.
    #[error("configuration source root must be an object")]
    RootNotObject {
        /// Path of the source file.
        path: PathBuf,
    },
}

impl ConfigError {
    /// Path of the source that failed to load.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::SourceUnavailable { path, .. }
            | Self::SourceMalformed { path, .. }
            | Self::RootNotObject { path } => path,
        }
    }
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn errors_expose_path_and_source() {
        let unavailable = ConfigError::SourceUnavailable {
            path: PathBuf::from("config.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(unavailable.path(), Path::new("config.json"));
        assert_eq!(unavailable.to_string(), "configuration source unavailable");
        assert!(unavailable.source().is_some());

        let root = ConfigError::RootNotObject {
            path: PathBuf::from("config.Staging.json"),
        };
        assert_eq!(root.path(), Path::new("config.Staging.json"));
        assert!(root.source().is_none());
    }
}
