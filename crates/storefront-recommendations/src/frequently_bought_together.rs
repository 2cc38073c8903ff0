//! Remote frequently-bought-together engine.
//!
//! The scoring service answers `GET <endpoint>?Id='<model>'&Item='<product>'`
//! with `{"d": {"results": [{"Item1": .., "Item2": .., "Item3": ..}]}}`, where
//! `Item1` echoes the queried product and the other columns hold
//! recommendations.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use storefront_bootstrap::ExternalRecommendationSettings;
use tracing::{debug, warn};
use url::Url;

use crate::client::AuthenticatedHttpClient;
use crate::engine::RecommendationEngine;
use crate::error::{RecommendationError, RecommendationResult};

/// Engine querying the external scoring service.
pub struct FrequentlyBoughtTogetherEngine {
    endpoint: Url,
    model_name: String,
    client: Arc<dyn AuthenticatedHttpClient>,
}

impl FrequentlyBoughtTogetherEngine {
    /// Build an engine for `settings` issuing requests through `client`.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendationError::InvalidEndpoint`] if the endpoint is not
    /// an absolute URL.
    pub fn new(
        settings: &ExternalRecommendationSettings,
        client: Arc<dyn AuthenticatedHttpClient>,
    ) -> RecommendationResult<Self> {
        let endpoint =
            Url::parse(settings.endpoint()).map_err(|source| RecommendationError::InvalidEndpoint {
                endpoint: settings.endpoint().to_string(),
                source,
            })?;
        Ok(Self {
            endpoint,
            model_name: settings.model_name().to_string(),
            client,
        })
    }

    fn scoring_url(&self, product_id: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("Id", &format!("'{}'", self.model_name))
            .append_pair("Item", &format!("'{product_id}'"));
        url
    }

    async fn fetch(&self, product_id: &str) -> RecommendationResult<Vec<String>> {
        let url = self.scoring_url(product_id);
        let body = self.client.get_json(&url).await?;
        let items = extract_items(body, product_id)?;
        debug!(product_id, count = items.len(), "recommendations fetched");
        Ok(items)
    }
}

impl std::fmt::Debug for FrequentlyBoughtTogetherEngine {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FrequentlyBoughtTogetherEngine")
            .field("endpoint", &self.endpoint.as_str())
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RecommendationEngine for FrequentlyBoughtTogetherEngine {
    async fn recommendations(&self, product_id: &str) -> RecommendationResult<Vec<String>> {
        let product_id = product_id.trim();
        if product_id.is_empty() {
            return Err(RecommendationError::InvalidProductId);
        }

        match self.fetch(product_id).await {
            Ok(items) => Ok(items),
            Err(err) => {
                warn!(error = %err, product_id, "recommendation lookup failed; returning none");
                Ok(Vec::new())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    d: ScoreResults,
}

#[derive(Debug, Deserialize)]
struct ScoreResults {
    #[serde(default)]
    results: Vec<ScoreRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ScoreRow {
    #[serde(default)]
    item2: Option<String>,
    #[serde(default)]
    item3: Option<String>,
}

fn extract_items(body: Value, product_id: &str) -> RecommendationResult<Vec<String>> {
    let response: ScoreResponse =
        serde_json::from_value(body).map_err(|source| RecommendationError::Payload { source })?;

    let mut items: Vec<String> = Vec::new();
    let candidates = response
        .d
        .results
        .into_iter()
        .flat_map(|row| [row.item2, row.item3])
        .flatten();
    for candidate in candidates {
        let candidate = candidate.trim();
        if candidate.is_empty() || candidate == product_id {
            continue;
        }
        if !items.iter().any(|existing| existing == candidate) {
            items.push(candidate.to_string());
        }
    }
    Ok(items)
}
