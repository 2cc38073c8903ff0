//! Engine trait and construction from the selected backend.

use std::sync::Arc;

use async_trait::async_trait;
use storefront_bootstrap::{ExternalRecommendationSettings, RecommendationBackend};
use tracing::debug;

use crate::client::{AuthenticatedHttpClient, DEFAULT_REQUEST_TIMEOUT, ReqwestAuthenticatedClient};
use crate::error::RecommendationResult;
use crate::frequently_bought_together::FrequentlyBoughtTogetherEngine;

/// Source of "customers also bought" product identifiers.
#[async_trait]
pub trait RecommendationEngine: Send + Sync {
    /// Product identifiers recommended alongside `product_id`.
    async fn recommendations(&self, product_id: &str) -> RecommendationResult<Vec<String>>;
}

/// Engine that never recommends anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyRecommendationEngine;

#[async_trait]
impl RecommendationEngine for EmptyRecommendationEngine {
    async fn recommendations(&self, _product_id: &str) -> RecommendationResult<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Build the engine matching `backend`.
///
/// `client_factory` is only called for [`RecommendationBackend::External`].
///
/// # Errors
///
/// Returns an error if the client factory fails or the endpoint is invalid.
pub fn engine_for<F>(
    backend: &RecommendationBackend,
    client_factory: F,
) -> RecommendationResult<Arc<dyn RecommendationEngine>>
where
    F: FnOnce(
        &ExternalRecommendationSettings,
    ) -> RecommendationResult<Arc<dyn AuthenticatedHttpClient>>,
{
    match backend {
        RecommendationBackend::External(settings) => {
            let client = client_factory(settings)?;
            let engine = FrequentlyBoughtTogetherEngine::new(settings, client)?;
            debug!(model = settings.model_name(), "external recommendation engine ready");
            Ok(Arc::new(engine))
        }
        RecommendationBackend::NoOp => Ok(Arc::new(EmptyRecommendationEngine)),
    }
}

/// Client factory backed by [`ReqwestAuthenticatedClient`].
///
/// # Errors
///
/// Returns [`RecommendationError::InvalidCredentials`] for an unusable
/// account key, or an error if the HTTP client cannot be built.
///
/// [`RecommendationError::InvalidCredentials`]: crate::RecommendationError::InvalidCredentials
pub fn reqwest_client_factory(
    settings: &ExternalRecommendationSettings,
) -> RecommendationResult<Arc<dyn AuthenticatedHttpClient>> {
    let client = ReqwestAuthenticatedClient::new(settings.account_key(), DEFAULT_REQUEST_TIMEOUT)?;
    Ok(Arc::new(client))
}
