//! Backend selection rules.
//!
//! Selection is a pure function of the configuration snapshot and the runtime
//! flag: identical inputs always produce identical choices.

use storefront_config::Configuration;
use tracing::info;

use crate::keys::{
    DEFAULT_CONNECTION_STRING, DEFAULT_RECOMMENDATIONS_ENDPOINT, RECOMMENDATIONS_ACCOUNT_KEY,
    RECOMMENDATIONS_ENDPOINT, RECOMMENDATIONS_MODEL_NAME, RECOMMENDATIONS_SECTION,
};
use crate::model::{
    ExternalRecommendationSettings, RecommendationBackend, ResolvedBootstrapConfig,
    StorageBackend,
};
use crate::runtime::RuntimeEnvironment;

/// Resolve every startup choice from `config` under `runtime`.
#[must_use]
pub fn resolve(config: &Configuration, runtime: RuntimeEnvironment) -> ResolvedBootstrapConfig {
    ResolvedBootstrapConfig {
        storage: select_storage_backend(config, runtime),
        recommendations: select_recommendation_backend(config),
        runtime,
    }
}

/// Pick the storage backend.
///
/// A missing or blank connection string selects the in-memory backend. The
/// alternate runtime selects it unconditionally, even when a connection string
/// is configured.
#[must_use]
pub fn select_storage_backend(
    config: &Configuration,
    runtime: RuntimeEnvironment,
) -> StorageBackend {
    let connection_string = config.lookup(DEFAULT_CONNECTION_STRING);
    match connection_string {
        Some(_) if runtime.is_alternate() => {
            info!(
                storage = "in_memory",
                reason = "alternate_runtime",
                "ignoring configured connection string on alternate runtime"
            );
            StorageBackend::InMemory
        }
        Some(connection_string) => StorageBackend::Primary {
            connection_string: connection_string.to_string(),
        },
        None => {
            info!(
                storage = "in_memory",
                reason = "connection_string_missing",
                key = DEFAULT_CONNECTION_STRING,
                "no connection string configured; using in-memory storage"
            );
            StorageBackend::InMemory
        }
    }
}

/// Pick the recommendation backend.
///
/// Both the account key and the model name must be present for the external
/// service; otherwise the no-op backend is used.
#[must_use]
pub fn select_recommendation_backend(config: &Configuration) -> RecommendationBackend {
    let section = config.section(RECOMMENDATIONS_SECTION);
    let account_key = section.lookup(RECOMMENDATIONS_ACCOUNT_KEY);
    let model_name = section.lookup(RECOMMENDATIONS_MODEL_NAME);

    let (Some(account_key), Some(model_name)) = (account_key, model_name) else {
        info!(
            recommendations = "no_op",
            account_key_present = account_key.is_some(),
            model_name_present = model_name.is_some(),
            "recommendation service keys not configured; using empty recommendations"
        );
        return RecommendationBackend::NoOp;
    };

    let endpoint = section
        .lookup(RECOMMENDATIONS_ENDPOINT)
        .unwrap_or(DEFAULT_RECOMMENDATIONS_ENDPOINT);
    RecommendationBackend::External(ExternalRecommendationSettings::new(
        account_key,
        model_name,
        endpoint,
    ))
}
