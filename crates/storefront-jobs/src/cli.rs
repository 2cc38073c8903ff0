//! Command-line arguments for the `process-order` binary.

use std::path::PathBuf;

use clap::Parser;
use storefront_telemetry::LogFormat;

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Arguments accepted by the `process-order` binary.
#[derive(Debug, Parser)]
#[command(name = "process-order", about = "Process queued storefront orders")]
pub struct JobsCli {
    /// Configuration file; it must exist.
    #[arg(long, env = "STOREFRONT_JOBS_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// Log output format (`json` or `pretty`); inferred from the build when unset.
    #[arg(long, env = "STOREFRONT_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_working_directory_file() -> Result<(), clap::Error> {
        let cli = JobsCli::try_parse_from(["process-order"])?;
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        Ok(())
    }

    #[test]
    fn config_path_can_be_overridden() -> Result<(), clap::Error> {
        let cli = JobsCli::try_parse_from([
            "process-order",
            "--config",
            "/etc/jobs/config.json",
            "--log-format",
            "pretty",
        ])?;
        assert_eq!(cli.config, PathBuf::from("/etc/jobs/config.json"));
        assert_eq!(cli.log_format, Some(LogFormat::Pretty));
        Ok(())
    }
}
