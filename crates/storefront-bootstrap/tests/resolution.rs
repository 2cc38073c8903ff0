use serde_json::json;
use storefront_bootstrap::{
    BootstrapError, BootstrapPhase, Bootstrapper, EXIT_MISSING_REQUIRED_CONFIG,
    RecommendationBackend, RuntimeEnvironment, StorageBackend,
};
use storefront_config::ConfigBuilder;
use storefront_test_support::fixtures::{ConfigFixture, full_website_document, job_runner_document};

#[test]
fn fully_configured_site_selects_primary_and_external() -> anyhow::Result<()> {
    let fixture = ConfigFixture::new()?;
    let base = fixture.write_json("config.json", &full_website_document())?;
    let mut bootstrapper = Bootstrapper::new(
        ConfigBuilder::new().add_json_file(base, true),
        RuntimeEnvironment::standard(),
    );

    let resolved = bootstrapper.resolve()?;
    assert_eq!(
        resolved.storage,
        StorageBackend::Primary {
            connection_string: "Server=(localdb)\\mssqllocaldb;Database=PartsUnlimited".into()
        }
    );
    let RecommendationBackend::External(settings) = &resolved.recommendations else {
        anyhow::bail!("expected external recommendations");
    };
    assert_eq!(settings.account_key(), "account-key");
    assert_eq!(settings.model_name(), "fbt-model");
    assert!(matches!(bootstrapper.phase(), BootstrapPhase::Resolved(_)));
    Ok(())
}

#[test]
fn environment_overlay_can_blank_out_optional_backends() -> anyhow::Result<()> {
    let fixture = ConfigFixture::new()?;
    let base = fixture.write_json("config.json", &full_website_document())?;
    let overlay = fixture.write_json(
        "config.Development.json",
        &json!({
            "ConnectionStrings": { "DefaultConnectionString": " " },
            "Keys": { "AzureMLFrequentlyBoughtTogether": { "ModelName": "" } }
        }),
    )?;
    let mut bootstrapper = Bootstrapper::new(
        ConfigBuilder::new()
            .add_json_file(base, true)
            .add_json_file(overlay, true),
        RuntimeEnvironment::standard(),
    );

    let resolved = bootstrapper.resolve()?;
    assert_eq!(resolved.storage, StorageBackend::InMemory);
    assert_eq!(resolved.recommendations, RecommendationBackend::NoOp);
    Ok(())
}

#[test]
fn empty_configuration_falls_back_everywhere() -> anyhow::Result<()> {
    let fixture = ConfigFixture::new()?;
    let mut bootstrapper = Bootstrapper::new(
        ConfigBuilder::new().add_json_file(fixture.path().join("config.json"), true),
        RuntimeEnvironment::alternate(),
    );

    let resolved = bootstrapper.resolve()?;
    assert_eq!(resolved.storage.connection_descriptor(), "");
    assert_eq!(resolved.recommendations, RecommendationBackend::NoOp);
    assert!(resolved.runtime.is_alternate());
    Ok(())
}

#[test]
fn job_runner_gate_reports_web_jobs_first() -> anyhow::Result<()> {
    let fixture = ConfigFixture::new()?;
    let config = fixture.write_json("config.json", &job_runner_document("", "x"))?;
    let mut bootstrapper = Bootstrapper::new(
        ConfigBuilder::new().add_json_file(config, false),
        RuntimeEnvironment::from_env(),
    );

    let err = bootstrapper
        .job_runner_settings()
        .expect_err("web jobs connection is blank");
    assert!(matches!(err, BootstrapError::MissingRequiredConfig { .. }));
    assert!(err.diagnostic().contains("Azure Web Jobs"));
    assert_eq!(err.exit_code(), EXIT_MISSING_REQUIRED_CONFIG);
    Ok(())
}
