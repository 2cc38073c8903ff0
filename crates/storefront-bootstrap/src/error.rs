//! # Design
//!
//! - Every bootstrap failure is fatal and detected once, synchronously.
//! - Keep error messages constant while carrying context fields; operator
//!   text comes from [`BootstrapError::diagnostic`].

use std::fmt;

use storefront_config::ConfigError;
use thiserror::Error;

use crate::gate::{EXIT_CONFIG_SOURCE_UNAVAILABLE, EXIT_MISSING_REQUIRED_CONFIG, RequiredSetting};

/// Result alias for bootstrap operations.
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A configuration source could not be loaded.
    #[error("configuration source unavailable")]
    ConfigSource {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: ConfigError,
    },
    /// A setting the process cannot run without is missing or blank.
    #[error("missing required configuration")]
    MissingRequiredConfig {
        /// The missing setting.
        setting: RequiredSetting,
    },
    /// Resolution was attempted again after a fatal failure.
    #[error("bootstrap already failed")]
    AlreadyFailed {
        /// Category of the original failure.
        kind: BootstrapErrorKind,
    },
}

impl BootstrapError {
    pub(crate) const fn config_source(operation: &'static str, source: ConfigError) -> Self {
        Self::ConfigSource { operation, source }
    }

    /// Failure category.
    #[must_use]
    pub const fn kind(&self) -> BootstrapErrorKind {
        match self {
            Self::ConfigSource { .. } => BootstrapErrorKind::ConfigSourceUnavailable,
            Self::MissingRequiredConfig { .. } => BootstrapErrorKind::MissingRequiredConfig,
            Self::AlreadyFailed { kind } => *kind,
        }
    }

    /// Process exit status for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }

    /// Human-readable diagnostic for operators.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        match self {
            Self::ConfigSource { source, .. } => format!(
                "The configuration file {} could not be loaded: {source}.",
                source.path().display()
            ),
            Self::MissingRequiredConfig { setting } => setting.diagnostic(),
            Self::AlreadyFailed { kind } => format!("Startup previously failed: {kind}."),
        }
    }
}

/// Category of a fatal bootstrap failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapErrorKind {
    /// A required setting was missing.
    MissingRequiredConfig,
    /// A configuration source could not be loaded.
    ConfigSourceUnavailable,
}

impl BootstrapErrorKind {
    /// Process exit status for the category.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::MissingRequiredConfig => EXIT_MISSING_REQUIRED_CONFIG,
            Self::ConfigSourceUnavailable => EXIT_CONFIG_SOURCE_UNAVAILABLE,
        }
    }
}

impl fmt::Display for BootstrapErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::MissingRequiredConfig => "missing required configuration",
            Self::ConfigSourceUnavailable => "configuration source unavailable",
        })
    }
}
