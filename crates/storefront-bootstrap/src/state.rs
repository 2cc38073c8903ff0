//! Resolve-once startup state machine.
//!
//! `Unresolved -> Resolved | Fatal`; both outcomes are terminal.

use std::sync::Arc;

use storefront_config::{ConfigBuilder, Configuration};
use tracing::{error, info};

use crate::error::{BootstrapError, BootstrapErrorKind, BootstrapResult};
use crate::gate::JobRunnerSettings;
use crate::model::ResolvedBootstrapConfig;
use crate::policy::resolve;
use crate::runtime::RuntimeEnvironment;

/// Where the bootstrapper is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapPhase {
    /// Sources have not been read yet.
    Unresolved,
    /// Choices were resolved and are shared read-only.
    Resolved(Arc<ResolvedBootstrapConfig>),
    /// Startup failed; the process must not continue.
    Fatal(BootstrapErrorKind),
}

/// Loads configuration sources once and resolves backend choices from them.
#[derive(Debug)]
pub struct Bootstrapper {
    builder: ConfigBuilder,
    runtime: RuntimeEnvironment,
    phase: BootstrapPhase,
    snapshot: Option<Arc<Configuration>>,
}

impl Bootstrapper {
    /// Prepare a bootstrapper over `builder`'s sources.
    #[must_use]
    pub fn new(builder: ConfigBuilder, runtime: RuntimeEnvironment) -> Self {
        Self {
            builder,
            runtime,
            phase: BootstrapPhase::Unresolved,
            snapshot: None,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> &BootstrapPhase {
        &self.phase
    }

    /// Configuration snapshot, available once sources loaded and cleared
    /// when startup fails.
    #[must_use]
    pub fn configuration(&self) -> Option<Arc<Configuration>> {
        self.snapshot.clone()
    }

    /// Resolve backend choices, loading sources on the first call only.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::ConfigSource`] if a source cannot be loaded,
    /// and [`BootstrapError::AlreadyFailed`] on every call after a failure.
    pub fn resolve(&mut self) -> BootstrapResult<Arc<ResolvedBootstrapConfig>> {
        if let BootstrapPhase::Resolved(resolved) = &self.phase {
            return Ok(Arc::clone(resolved));
        }
        let snapshot = self.load()?;

        let resolved = Arc::new(resolve(&snapshot, self.runtime));
        info!(
            storage = resolved.storage.kind(),
            recommendations = resolved.recommendations.kind(),
            alternate_runtime = self.runtime.is_alternate(),
            "bootstrap configuration resolved"
        );
        self.phase = BootstrapPhase::Resolved(Arc::clone(&resolved));
        Ok(resolved)
    }

    /// Require every job runner setting to be present.
    ///
    /// Only loads sources; website backend selection is not run.
    ///
    /// # Errors
    ///
    /// Returns the load error, or
    /// [`BootstrapError::MissingRequiredConfig`] for the first missing setting.
    pub fn job_runner_settings(&mut self) -> BootstrapResult<JobRunnerSettings> {
        let snapshot = self.load()?;
        JobRunnerSettings::from_config(&snapshot).map_err(|err| self.fail(err))
    }

    fn load(&mut self) -> BootstrapResult<Arc<Configuration>> {
        if let BootstrapPhase::Fatal(kind) = &self.phase {
            return Err(BootstrapError::AlreadyFailed { kind: *kind });
        }
        if let Some(snapshot) = &self.snapshot {
            return Ok(Arc::clone(snapshot));
        }

        let snapshot = match self.builder.build() {
            Ok(snapshot) => Arc::new(snapshot),
            Err(source) => {
                return Err(self.fail(BootstrapError::config_source("config.build", source)));
            }
        };
        self.snapshot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    fn fail(&mut self, err: BootstrapError) -> BootstrapError {
        error!(error = %err, diagnostic = %err.diagnostic(), "bootstrap failed");
        self.phase = BootstrapPhase::Fatal(err.kind());
        self.snapshot = None;
        err
    }
}
