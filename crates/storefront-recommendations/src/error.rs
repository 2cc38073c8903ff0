//! Error types for recommendation lookups.

use thiserror::Error;

/// Result alias for recommendation operations.
pub type RecommendationResult<T> = Result<T, RecommendationError>;

/// Failures raised while building or querying a recommendation engine.
#[derive(Debug, Error)]
pub enum RecommendationError {
    /// The product identifier was blank.
    #[error("invalid product identifier")]
    InvalidProductId,
    /// The configured endpoint is not a valid URL.
    #[error("invalid recommendation endpoint")]
    InvalidEndpoint {
        /// Endpoint as configured.
        endpoint: String,
        /// Source parse error.
        source: url::ParseError,
    },
    /// The account key contains characters an HTTP header cannot carry.
    #[error("invalid recommendation credentials")]
    InvalidCredentials,
    /// The HTTP client could not be constructed.
    #[error("failed to build http client")]
    ClientBuild {
        /// Source HTTP client error.
        source: reqwest::Error,
    },
    /// HTTP client operations failed.
    #[error("http operation failed")]
    Http {
        /// Operation identifier.
        operation: &'static str,
        /// URL used for the request.
        url: String,
        /// Source HTTP client error.
        source: reqwest::Error,
    },
    /// HTTP response returned a non-success status.
    #[error("http response status error")]
    HttpStatus {
        /// URL used for the request.
        url: String,
        /// HTTP status code returned by the server.
        status: u16,
    },
    /// The response body did not match the expected shape.
    #[error("unexpected recommendation payload")]
    Payload {
        /// Source decode error.
        source: serde_json::Error,
    },
}
