//! Temporary configuration directories and sample documents.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Scratch directory holding configuration files for a single test.
///
/// The directory is removed when the fixture is dropped.
pub struct ConfigFixture {
    dir: TempDir,
}

impl ConfigFixture {
    /// Create an empty scratch directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("storefront-config-")
            .tempdir()
            .context("failed to create config fixture directory")?;
        Ok(Self { dir })
    }

    /// Directory containing the fixture files.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Serialize `document` as pretty JSON into `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or the write fails.
    pub fn write_json(&self, name: &str, document: &Value) -> Result<PathBuf> {
        let contents = serde_json::to_string_pretty(document)
            .with_context(|| format!("failed to serialize fixture {name}"))?;
        self.write_raw(name, &contents)
    }

    /// Write `contents` verbatim into `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn write_raw(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)
            .with_context(|| format!("failed to write fixture {}", path.display()))?;
        Ok(path)
    }
}

/// Website configuration with every optional backend configured.
#[must_use]
pub fn full_website_document() -> Value {
    json!({
        "ConnectionStrings": {
            "DefaultConnectionString": "Server=(localdb)\\mssqllocaldb;Database=PartsUnlimited"
        },
        "Keys": {
            "AzureMLFrequentlyBoughtTogether": {
                "AccountKey": "account-key",
                "ModelName": "fbt-model"
            },
            "ApplicationInsights": {
                "InstrumentationKey": "00000000-0000-0000-0000-000000000000"
            }
        },
        "WebsiteOptions": {
            "ShowWelcomePage": true
        },
        "CDN": {
            "Images": "https://cdn.example.com/images"
        },
        "Authentication": {
            "MicrosoftAccount": {
                "Key": "client-id",
                "Secret": "client-secret"
            }
        }
    })
}

/// Job runner configuration with the given connection strings.
#[must_use]
pub fn job_runner_document(jobs_storage: &str, database: &str) -> Value {
    json!({
        "Data": {
            "AzureWebJobsStorage": { "ConnectionString": jobs_storage },
            "DefaultConnection": { "ConnectionString": database }
        }
    })
}
