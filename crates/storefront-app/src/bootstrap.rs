//! Website boot sequence: configuration layering, service wiring and command
//! execution.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use storefront_bootstrap::{Bootstrapper, ExternalRecommendationSettings, RuntimeEnvironment};
use storefront_config::ConfigBuilder;
use storefront_recommendations::{
    AuthenticatedHttpClient, EmptyRecommendationEngine, RecommendationEngine,
    RecommendationResult, engine_for, reqwest_client_factory,
};
use storefront_telemetry::{LogFormat, LoggingConfig, init_logging, process_span};
use tracing::{Instrument, info, warn};

use crate::cli::{Cli, Command};
use crate::error::{AppError, AppResult};
use crate::services::{AppServices, SiteSections};

/// Dependencies required to bootstrap the website.
pub(crate) struct BootstrapDependencies {
    logging: LoggingConfig<'static>,
    bootstrapper: Bootstrapper,
    command: Command,
}

impl BootstrapDependencies {
    /// Construct production dependencies from parsed arguments and the environment.
    pub(crate) fn from_cli(cli: &Cli) -> Self {
        let logging = LoggingConfig {
            format: cli.log_format.unwrap_or_else(LogFormat::infer),
            ..LoggingConfig::default()
        };
        let bootstrapper = Bootstrapper::new(
            config_builder(&cli.config_dir, &cli.environment),
            RuntimeEnvironment::from_env(),
        );
        Self {
            logging,
            bootstrapper,
            command: cli.effective_command(),
        }
    }
}

/// Configuration sources for the website: `config.json`, then the
/// `config.<environment>.json` overlay. Both are optional.
#[must_use]
pub fn config_builder(config_dir: &Path, environment: &str) -> ConfigBuilder {
    ConfigBuilder::new()
        .add_json_file(config_dir.join("config.json"), true)
        .add_json_file(config_dir.join(format!("config.{environment}.json")), true)
}

/// Entry point for the website boot sequence.
///
/// # Errors
///
/// Returns an error if logging cannot be installed, startup resolution fails,
/// or the command fails.
pub async fn run_app() -> AppResult<()> {
    let cli = Cli::parse();
    let dependencies = BootstrapDependencies::from_cli(&cli);
    run_app_with(dependencies, &mut io::stdout()).await
}

/// Boot sequence that relies entirely on injected dependencies.
pub(crate) async fn run_app_with<W>(
    dependencies: BootstrapDependencies,
    out: &mut W,
) -> AppResult<()>
where
    W: Write + Send,
{
    let BootstrapDependencies {
        logging,
        mut bootstrapper,
        command,
    } = dependencies;

    init_logging(&logging).map_err(|err| AppError::telemetry("telemetry.init", err))?;
    serve(&mut bootstrapper, reqwest_client_factory, &command, out).await
}

/// Build services and run `command`, all inside the process span.
pub(crate) async fn serve<F, W>(
    bootstrapper: &mut Bootstrapper,
    client_factory: F,
    command: &Command,
    out: &mut W,
) -> AppResult<()>
where
    F: FnOnce(
            &ExternalRecommendationSettings,
        ) -> RecommendationResult<Arc<dyn AuthenticatedHttpClient>>
        + Send,
    W: Write + Send,
{
    async {
        info!("storefront bootstrap starting");
        let services = build_services(bootstrapper, client_factory)?;
        execute(command, &services, out).await
    }
    .instrument(process_span("storefront"))
    .await
}

/// Resolve startup choices and wire the services the site runs on.
///
/// A recommendation engine that cannot be built degrades to the empty engine;
/// recommendations are never fatal to startup.
///
/// # Errors
///
/// Returns [`AppError::Bootstrap`] if configuration sources cannot be loaded.
pub fn build_services<F>(
    bootstrapper: &mut Bootstrapper,
    client_factory: F,
) -> AppResult<AppServices>
where
    F: FnOnce(
        &ExternalRecommendationSettings,
    ) -> RecommendationResult<Arc<dyn AuthenticatedHttpClient>>,
{
    let resolved = bootstrapper
        .resolve()
        .map_err(|err| AppError::bootstrap("bootstrap.resolve", err))?;
    let config = bootstrapper
        .configuration()
        .ok_or(AppError::MissingState {
            field: "configuration",
        })?;

    let engine: Arc<dyn RecommendationEngine> =
        match engine_for(&resolved.recommendations, client_factory) {
            Ok(engine) => engine,
            Err(err) => {
                warn!(error = %err, "recommendation engine unavailable; using empty engine");
                Arc::new(EmptyRecommendationEngine)
            }
        };

    let sections = SiteSections::from_config(&config);
    let presence = sections.presence();
    info!(
        storage = resolved.storage.kind(),
        recommendations = resolved.recommendations.kind(),
        alternate_runtime = resolved.runtime.is_alternate(),
        website_options = presence.website_options,
        application_insights = presence.application_insights,
        cdn = presence.cdn,
        authentication = presence.authentication,
        "storefront services ready"
    );

    Ok(AppServices::new(resolved, engine, sections))
}

/// Run `command` against resolved services, writing JSON to `out`.
///
/// # Errors
///
/// Returns an error if the lookup is rejected or output cannot be written.
pub async fn execute<W>(command: &Command, services: &AppServices, out: &mut W) -> AppResult<()>
where
    W: Write + Send,
{
    let rendered = match command {
        Command::Resolve => serde_json::to_string_pretty(&services.summary()),
        Command::Recommend { product_id } => {
            let items = services
                .recommendation_engine()
                .recommendations(product_id)
                .await
                .map_err(|err| AppError::recommendation("recommendations.lookup", err))?;
            serde_json::to_string_pretty(&items)
        }
    }
    .map_err(|err| AppError::serialize("output.render", err))?;

    writeln!(out, "{rendered}").map_err(|err| AppError::output("output.write", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use storefront_bootstrap::keys;
    use storefront_config::key_path;
    use storefront_telemetry::DEFAULT_LOG_LEVEL;
    use storefront_test_support::fixtures::{ConfigFixture, full_website_document};

    #[tokio::test]
    async fn run_app_with_prints_the_resolution_summary() -> anyhow::Result<()> {
        let fixture = ConfigFixture::new()?;
        fixture.write_json("config.json", &full_website_document())?;
        let dependencies = BootstrapDependencies {
            logging: LoggingConfig {
                level: DEFAULT_LOG_LEVEL,
                format: LogFormat::Pretty,
                build_sha: "test",
            },
            bootstrapper: Bootstrapper::new(
                config_builder(fixture.path(), "Test"),
                RuntimeEnvironment::standard(),
            ),
            command: Command::Resolve,
        };

        let mut out = Vec::new();
        run_app_with(dependencies, &mut out).await?;

        let summary: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(summary["storage"]["kind"], "primary");
        assert_eq!(summary["recommendations"]["kind"], "external");
        assert_eq!(summary["sections"]["cdn"], true);
        Ok(())
    }

    #[test]
    fn from_cli_uses_requested_command() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["storefront", "--log-format", "json", "recommend", "7"])?;
        let dependencies = BootstrapDependencies::from_cli(&cli);
        assert_eq!(dependencies.logging.format, LogFormat::Json);
        assert_eq!(
            dependencies.command,
            Command::Recommend {
                product_id: "7".into()
            }
        );
        Ok(())
    }

    #[test]
    fn config_builder_layers_environment_overlay() {
        let builder = config_builder(Path::new("/srv/site"), "Staging");
        let rendered = format!("{:?}", builder.sources());
        assert!(rendered.contains("/srv/site/config.json"));
        assert!(rendered.contains("/srv/site/config.Staging.json"));
    }

    struct SpanRecordingClient(Arc<Mutex<Option<&'static str>>>);

    #[async_trait::async_trait]
    impl AuthenticatedHttpClient for SpanRecordingClient {
        async fn get_json(&self, _url: &url::Url) -> RecommendationResult<serde_json::Value> {
            let current = tracing::Span::current().metadata().map(|meta| meta.name());
            *self.0.lock().expect("span slot") = current;
            Ok(serde_json::json!({ "d": { "results": [] } }))
        }
    }

    #[tokio::test]
    async fn recommend_lookups_run_inside_the_process_span() -> anyhow::Result<()> {
        let _subscriber = tracing::subscriber::set_default(tracing_subscriber::registry());
        let seen = Arc::new(Mutex::new(None));
        let recorder = Arc::clone(&seen);
        let builder = ConfigBuilder::new().add_in_memory([
            (
                key_path(&[keys::RECOMMENDATIONS_SECTION, keys::RECOMMENDATIONS_ACCOUNT_KEY]),
                "account".to_string(),
            ),
            (
                key_path(&[keys::RECOMMENDATIONS_SECTION, keys::RECOMMENDATIONS_MODEL_NAME]),
                "fbt".to_string(),
            ),
        ]);
        let mut bootstrapper = Bootstrapper::new(builder, RuntimeEnvironment::standard());

        let mut out = Vec::new();
        serve(
            &mut bootstrapper,
            move |_| {
                Ok(Arc::new(SpanRecordingClient(recorder)) as Arc<dyn AuthenticatedHttpClient>)
            },
            &Command::Recommend {
                product_id: "42".into(),
            },
            &mut out,
        )
        .await?;

        assert_eq!(*seen.lock().expect("span slot"), Some("storefront"));
        let items: Vec<String> = serde_json::from_slice(&out)?;
        assert!(items.is_empty());
        Ok(())
    }
}
