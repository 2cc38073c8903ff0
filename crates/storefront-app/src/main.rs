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

//! Binary entrypoint that resolves the website's startup configuration.

use std::process;

use storefront_app::run_app;

/// Resolves configuration, runs the requested command and exits with the
/// failure's status code on error.
#[tokio::main]
async fn main() {
    if let Err(err) = run_app().await {
        eprintln!("error: {}", err.display_message());
        process::exit(err.exit_code());
    }
}
