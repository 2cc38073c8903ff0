use httpmock::prelude::*;
use serde_json::json;
use storefront_bootstrap::{ExternalRecommendationSettings, RecommendationBackend};
use storefront_recommendations::{engine_for, reqwest_client_factory};

const EXPECTED_AUTHORIZATION: &str = "Basic QWNjb3VudEtleTphY2NvdW50LWtleQ==";

fn backend(endpoint: String) -> RecommendationBackend {
    RecommendationBackend::External(ExternalRecommendationSettings::new(
        "account-key",
        "fbt-model",
        endpoint,
    ))
}

#[tokio::test]
async fn external_engine_queries_the_scoring_service() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/score")
                .query_param("Id", "'fbt-model'")
                .query_param("Item", "'17'")
                .header("authorization", EXPECTED_AUTHORIZATION);
            then.status(200).json_body(json!({
                "d": {
                    "results": [
                        { "Item1": "17", "Item2": "4", "Item3": "21" },
                        { "Item1": "17", "Item2": "21", "Item3": "" }
                    ]
                }
            }));
        })
        .await;

    let engine = engine_for(&backend(server.url("/score")), reqwest_client_factory)?;
    let items = engine.recommendations("17").await?;

    mock.assert_async().await;
    assert_eq!(items, vec!["4", "21"]);
    Ok(())
}

#[tokio::test]
async fn rejected_credentials_yield_no_recommendations() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/score");
            then.status(401).body("unauthorized");
        })
        .await;

    let engine = engine_for(&backend(server.url("/score")), reqwest_client_factory)?;
    let items = engine.recommendations("17").await?;

    mock.assert_async().await;
    assert!(items.is_empty());
    Ok(())
}
