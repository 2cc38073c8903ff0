//! Backend choices produced by the startup policy.
//!
//! # Design
//! - Each capability is a closed set of variants; consumers match instead of
//!   probing types at runtime.
//! - Secrets (connection strings, account keys) never reach `Debug` output or
//!   serialised summaries.

use std::fmt;

use serde::Serialize;

use crate::runtime::RuntimeEnvironment;

const REDACTED: &str = "<redacted>";

/// Selected storage backend.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageBackend {
    /// Database reached through the configured connection string.
    Primary {
        /// Connection string, verbatim from configuration.
        #[serde(skip_serializing)]
        connection_string: String,
    },
    /// Process-local store used when no usable connection is available.
    InMemory,
}

impl StorageBackend {
    /// Connection descriptor handed to the data layer; empty for in-memory.
    #[must_use]
    pub fn connection_descriptor(&self) -> &str {
        match self {
            Self::Primary { connection_string } => connection_string,
            Self::InMemory => "",
        }
    }

    /// Short label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Primary { .. } => "primary",
            Self::InMemory => "in_memory",
        }
    }
}

impl fmt::Debug for StorageBackend {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary { .. } => formatter
                .debug_struct("Primary")
                .field("connection_string", &REDACTED)
                .finish(),
            Self::InMemory => formatter.write_str("InMemory"),
        }
    }
}

/// Credentials and model for the external recommendation service.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ExternalRecommendationSettings {
    #[serde(skip_serializing)]
    account_key: String,
    model_name: String,
    endpoint: String,
}

impl ExternalRecommendationSettings {
    /// Bundle the service settings.
    #[must_use]
    pub fn new(
        account_key: impl Into<String>,
        model_name: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            account_key: account_key.into(),
            model_name: model_name.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Account key used to authenticate requests.
    #[must_use]
    pub fn account_key(&self) -> &str {
        &self.account_key
    }

    /// Model queried for recommendations.
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Base URL of the scoring endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Debug for ExternalRecommendationSettings {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ExternalRecommendationSettings")
            .field("account_key", &REDACTED)
            .field("model_name", &self.model_name)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Selected recommendation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecommendationBackend {
    /// Remote frequently-bought-together service.
    External(ExternalRecommendationSettings),
    /// Stub returning no recommendations.
    NoOp,
}

impl RecommendationBackend {
    /// Short label for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::External(_) => "external",
            Self::NoOp => "no_op",
        }
    }
}

/// Every startup choice, resolved once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBootstrapConfig {
    /// Storage backend choice.
    pub storage: StorageBackend,
    /// Recommendation backend choice.
    pub recommendations: RecommendationBackend,
    /// Runtime facts the choices were made under.
    pub runtime: RuntimeEnvironment,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn debug_output_redacts_secrets() {
        let storage = StorageBackend::Primary {
            connection_string: "Server=db;Password=hunter2".into(),
        };
        let settings = ExternalRecommendationSettings::new("secret-key", "fbt", "https://ml");
        let rendered = format!("{storage:?} {settings:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("fbt"));
    }

    #[test]
    fn serialized_summary_omits_secrets() -> Result<(), serde_json::Error> {
        let resolved = ResolvedBootstrapConfig {
            storage: StorageBackend::Primary {
                connection_string: "Server=db;Password=hunter2".into(),
            },
            recommendations: RecommendationBackend::External(
                ExternalRecommendationSettings::new("secret-key", "fbt", "https://ml"),
            ),
            runtime: RuntimeEnvironment::standard(),
        };
        let value = serde_json::to_value(&resolved)?;
        assert_eq!(
            value,
            json!({
                "storage": { "kind": "primary" },
                "recommendations": {
                    "kind": "external",
                    "model_name": "fbt",
                    "endpoint": "https://ml"
                },
                "runtime": { "alternate_runtime": false }
            })
        );
        Ok(())
    }

    #[test]
    fn in_memory_descriptor_is_empty() {
        assert_eq!(StorageBackend::InMemory.connection_descriptor(), "");
        assert_eq!(StorageBackend::InMemory.kind(), "in_memory");
        assert_eq!(RecommendationBackend::NoOp.kind(), "no_op");
    }
}
