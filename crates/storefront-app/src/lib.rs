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

//! Storefront website composition root.
//!
//! Layout: `cli.rs` (arguments), `bootstrap.rs` (source layering, service
//! wiring, command execution), `services.rs` (resolved services handed to
//! the site), `error.rs`.

pub mod bootstrap;
pub mod cli;
pub mod error;
pub mod services;

pub use bootstrap::{build_services, config_builder, execute, run_app};
pub use cli::{Cli, Command, DEFAULT_ENVIRONMENT};
pub use error::{AppError, AppResult};
pub use services::{AppServices, ResolutionSummary, SectionPresence, SiteSections};
