//! Required settings for the order-processing job runner.
//!
//! Exit statuses are read by process supervisors and must not change.

use std::fmt;

use storefront_config::Configuration;

use crate::error::{BootstrapError, BootstrapResult};
use crate::keys::{JOBS_DATABASE_CONNECTION_STRING, JOBS_STORAGE_CONNECTION_STRING};

/// Exit status for a run that completed.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for a configuration source that could not be loaded.
pub const EXIT_CONFIG_SOURCE_UNAVAILABLE: i32 = 1;
/// Exit status for a missing required setting.
pub const EXIT_MISSING_REQUIRED_CONFIG: i32 = 10;

/// A setting the job runner cannot start without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredSetting {
    /// Job queue storage connection string.
    JobsStorageConnection,
    /// Database connection string.
    DatabaseConnection,
}

impl RequiredSetting {
    /// Every required setting, in the order they are checked.
    pub const ALL: [Self; 2] = [Self::JobsStorageConnection, Self::DatabaseConnection];

    /// Configuration key path.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::JobsStorageConnection => JOBS_STORAGE_CONNECTION_STRING,
            Self::DatabaseConnection => JOBS_DATABASE_CONNECTION_STRING,
        }
    }

    /// Operator-facing name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::JobsStorageConnection => "Azure Web Jobs Connection String",
            Self::DatabaseConnection => "Database Connection String",
        }
    }

    /// Diagnostic printed when the setting is missing.
    #[must_use]
    pub fn diagnostic(self) -> String {
        format!("The configuration value for {} is missing.", self.label())
    }
}

impl fmt::Display for RequiredSetting {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Connection strings the job runner needs, all known to be non-blank.
#[derive(Clone, PartialEq, Eq)]
pub struct JobRunnerSettings {
    jobs_storage_connection: String,
    database_connection: String,
}

impl JobRunnerSettings {
    /// Check every [`RequiredSetting`] in order.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::MissingRequiredConfig`] naming the first
    /// setting that is absent or blank.
    pub fn from_config(config: &Configuration) -> BootstrapResult<Self> {
        let require = |setting: RequiredSetting| {
            config
                .lookup(setting.key())
                .map(str::to_string)
                .ok_or(BootstrapError::MissingRequiredConfig { setting })
        };
        let jobs_storage_connection = require(RequiredSetting::JobsStorageConnection)?;
        let database_connection = require(RequiredSetting::DatabaseConnection)?;
        Ok(Self {
            jobs_storage_connection,
            database_connection,
        })
    }

    /// Job queue storage connection string.
    #[must_use]
    pub fn jobs_storage_connection(&self) -> &str {
        &self.jobs_storage_connection
    }

    /// Database connection string.
    #[must_use]
    pub fn database_connection(&self) -> &str {
        &self.database_connection
    }
}

impl fmt::Debug for JobRunnerSettings {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("JobRunnerSettings")
            .field("jobs_storage_connection", &"<redacted>")
            .field("database_connection", &"<redacted>")
            .finish()
    }
}
