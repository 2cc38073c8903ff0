//! Command-line arguments for the `storefront` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use storefront_telemetry::LogFormat;

/// Hosting environment used when none is given.
pub const DEFAULT_ENVIRONMENT: &str = "Production";

/// Arguments accepted by the `storefront` binary.
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Resolve Storefront website startup configuration")]
pub struct Cli {
    /// Directory holding `config.json` and `config.<Environment>.json`.
    #[arg(long, global = true, env = "STOREFRONT_CONFIG_DIR", default_value = ".")]
    pub config_dir: PathBuf,
    /// Hosting environment name selecting the overlay file.
    #[arg(
        long,
        global = true,
        env = "STOREFRONT_ENVIRONMENT",
        default_value = DEFAULT_ENVIRONMENT
    )]
    pub environment: String,
    /// Log output format (`json` or `pretty`); inferred from the build when unset.
    #[arg(long, global = true, env = "STOREFRONT_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,
    /// Command to run; defaults to `resolve`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The requested command, falling back to [`Command::Resolve`].
    #[must_use]
    pub fn effective_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Resolve)
    }
}

/// Commands exposed by the `storefront` binary.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the resolved backends and section presence as JSON.
    Resolve,
    /// Print recommended product identifiers for a product as JSON.
    Recommend {
        /// Product identifier to look up.
        product_id: String,
    },
}
