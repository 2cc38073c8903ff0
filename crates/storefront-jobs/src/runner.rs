//! Job runner startup: logging, configuration gate, exit status.

use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use storefront_bootstrap::{Bootstrapper, EXIT_SUCCESS, RuntimeEnvironment};
use storefront_config::ConfigBuilder;
use storefront_telemetry::{GlobalContextGuard, LogFormat, LoggingConfig, init_logging};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::cli::JobsCli;

/// Exit status when logging cannot be installed.
pub const EXIT_STARTUP_FAILURE: i32 = 1;

/// Parse arguments, install logging and run the job.
///
/// Returns the process exit status.
#[must_use]
pub fn run() -> i32 {
    let cli = JobsCli::parse();
    let logging = LoggingConfig {
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
        ..LoggingConfig::default()
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("error: {err}");
        return EXIT_STARTUP_FAILURE;
    }
    run_job(&cli.config, RuntimeEnvironment::from_env(), &mut io::stdout())
}

/// Load `config_path` and check the settings the job cannot run without.
///
/// Diagnostics for operators are written to `console`, one line each.
/// Returns [`EXIT_SUCCESS`] or the failure's exit status.
pub fn run_job<W: Write>(
    config_path: &Path,
    runtime: RuntimeEnvironment,
    console: &mut W,
) -> i32 {
    let run_id = Uuid::new_v4();
    let _context = GlobalContextGuard::for_run("process-order", run_id);
    info!(config = %config_path.display(), "order processing starting");

    let mut bootstrapper = Bootstrapper::new(
        ConfigBuilder::new().add_json_file(config_path, false),
        runtime,
    );
    match bootstrapper.job_runner_settings() {
        Ok(settings) => {
            info!(?settings, "required configuration present");
            EXIT_SUCCESS
        }
        Err(err) => {
            let diagnostic = err.diagnostic();
            if let Err(write_err) = writeln!(console, "{diagnostic}") {
                warn!(error = %write_err, "failed to write diagnostic");
            }
            error!(exit_code = err.exit_code(), "order processing refused to start");
            err.exit_code()
        }
    }
}
