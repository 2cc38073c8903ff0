//! Authenticated HTTP capability used by the external engine.

use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::error::{RecommendationError, RecommendationResult};

/// Request timeout applied by [`ReqwestAuthenticatedClient`].
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client that attaches the service credentials to every request.
#[async_trait]
pub trait AuthenticatedHttpClient: Send + Sync {
    /// Issue a `GET` and decode the body as JSON.
    async fn get_json(&self, url: &Url) -> RecommendationResult<Value>;
}

/// [`AuthenticatedHttpClient`] backed by `reqwest` with basic authentication.
#[derive(Debug, Clone)]
pub struct ReqwestAuthenticatedClient {
    client: Client,
}

impl ReqwestAuthenticatedClient {
    /// Build a client authenticating as `AccountKey:<account_key>`.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendationError::InvalidCredentials`] if the key holds
    /// control characters, or an error if the client cannot be built.
    pub fn new(account_key: &str, timeout: Duration) -> RecommendationResult<Self> {
        if account_key.chars().any(char::is_control) {
            return Err(RecommendationError::InvalidCredentials);
        }
        let credentials = general_purpose::STANDARD.encode(format!("AccountKey:{account_key}"));
        let mut authorization = HeaderValue::from_str(&format!("Basic {credentials}"))
            .map_err(|_| RecommendationError::InvalidCredentials)?;
        authorization.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, authorization);

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|source| RecommendationError::ClientBuild { source })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AuthenticatedHttpClient for ReqwestAuthenticatedClient {
    async fn get_json(&self, url: &Url) -> RecommendationResult<Value> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| RecommendationError::Http {
                operation: "recommendations.send",
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecommendationError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| RecommendationError::Http {
                operation: "recommendations.decode",
                url: url.to_string(),
                source,
            })
    }
}
