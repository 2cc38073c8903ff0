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

//! Order-processing job runner.
//!
//! The runner refuses to start unless every required connection string is
//! configured, reporting the first missing one and exiting with a stable
//! status code.

pub mod cli;
pub mod runner;

pub use cli::{DEFAULT_CONFIG_PATH, JobsCli};
pub use runner::{EXIT_STARTUP_FAILURE, run, run_job};
