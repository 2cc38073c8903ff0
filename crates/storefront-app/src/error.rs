//! # Design
//!
//! - Centralize website startup and command errors.
//! - Keep error messages constant while carrying context fields for debugging.
//! - Bootstrap failures keep their own exit status; everything else exits 1.

use std::io;

use storefront_bootstrap::BootstrapError;
use storefront_recommendations::RecommendationError;
use storefront_telemetry::TelemetryError;
use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Exit status for failures outside the bootstrap policy.
const EXIT_FAILURE: i32 = 1;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Startup policy resolution failed.
    #[error("bootstrap failed")]
    Bootstrap {
        /// Operation identifier.
        operation: &'static str,
        /// Source bootstrap error.
        source: BootstrapError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: TelemetryError,
    },
    /// A recommendation lookup was rejected.
    #[error("recommendation lookup failed")]
    Recommendation {
        /// Operation identifier.
        operation: &'static str,
        /// Source recommendation error.
        source: RecommendationError,
    },
    /// Command output could not be rendered.
    #[error("output serialization failed")]
    Serialize {
        /// Operation identifier.
        operation: &'static str,
        /// Source serialization error.
        source: serde_json::Error,
    },
    /// Command output could not be written.
    #[error("output write failed")]
    Output {
        /// Operation identifier.
        operation: &'static str,
        /// Source IO error.
        source: io::Error,
    },
    /// Required runtime state was missing.
    #[error("missing state")]
    MissingState {
        /// State field that was missing.
        field: &'static str,
    },
}

impl AppError {
    pub(crate) const fn bootstrap(operation: &'static str, source: BootstrapError) -> Self {
        Self::Bootstrap { operation, source }
    }

    pub(crate) const fn telemetry(operation: &'static str, source: TelemetryError) -> Self {
        Self::Telemetry { operation, source }
    }

    pub(crate) const fn recommendation(
        operation: &'static str,
        source: RecommendationError,
    ) -> Self {
        Self::Recommendation { operation, source }
    }

    pub(crate) const fn serialize(operation: &'static str, source: serde_json::Error) -> Self {
        Self::Serialize { operation, source }
    }

    pub(crate) const fn output(operation: &'static str, source: io::Error) -> Self {
        Self::Output { operation, source }
    }

    /// Process exit status for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Bootstrap { source, .. } => source.exit_code(),
            _ => EXIT_FAILURE,
        }
    }

    /// Operator-facing message.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Bootstrap { source, .. } => source.diagnostic(),
            Self::Telemetry { source, .. } => format!("{self}: {source}"),
            Self::Recommendation { source, .. } => format!("{self}: {source}"),
            Self::Serialize { source, .. } => format!("{self}: {source}"),
            Self::Output { source, .. } => format!("{self}: {source}"),
            Self::MissingState { field } => format!("{self}: {field}"),
        }
    }
}
