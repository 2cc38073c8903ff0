#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Startup policy that turns a configuration snapshot into backend choices.
//!
//! Layout: `keys.rs` (consumed key paths), `runtime.rs` (runtime flag),
//! `model.rs` (backend choices), `policy.rs` (selection rules), `state.rs`
//! (resolve-once bootstrapper), `gate.rs` (job runner required settings and
//! exit codes), `error.rs`.

pub mod error;
pub mod gate;
pub mod keys;
pub mod model;
pub mod policy;
pub mod runtime;
pub mod state;

pub use error::{BootstrapError, BootstrapErrorKind, BootstrapResult};
pub use gate::{
    EXIT_CONFIG_SOURCE_UNAVAILABLE, EXIT_MISSING_REQUIRED_CONFIG, EXIT_SUCCESS, JobRunnerSettings,
    RequiredSetting,
};
pub use model::{
    ExternalRecommendationSettings, RecommendationBackend, ResolvedBootstrapConfig,
    StorageBackend,
};
pub use policy::{resolve, select_recommendation_backend, select_storage_backend};
pub use runtime::{ALTERNATE_RUNTIME_ENV, RuntimeEnvironment, env_flag_value};
pub use state::{BootstrapPhase, Bootstrapper};
