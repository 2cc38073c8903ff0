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

//! Recommendation engines chosen by the startup policy.
//!
//! Layout: `engine.rs` (engine trait, empty engine, factory), `client.rs`
//! (authenticated HTTP capability), `frequently_bought_together.rs` (external
//! engine), `error.rs`.

pub mod client;
pub mod engine;
pub mod error;
pub mod frequently_bought_together;

pub use client::{AuthenticatedHttpClient, DEFAULT_REQUEST_TIMEOUT, ReqwestAuthenticatedClient};
pub use engine::{
    EmptyRecommendationEngine, RecommendationEngine, engine_for, reqwest_client_factory,
};
pub use error::{RecommendationError, RecommendationResult};
pub use frequently_bought_together::FrequentlyBoughtTogetherEngine;
