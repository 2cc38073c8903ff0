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

//! Layered, hierarchical configuration snapshots.
//!
//! Layout: `path.rs` (key path helpers), `loader.rs` (`ConfigBuilder` and
//! sources), `model.rs` (`Configuration` snapshot and `ConfigSection` views),
//! `error.rs` (load failures).

pub mod error;
pub mod loader;
pub mod model;
pub mod path;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigBuilder, ConfigSource};
pub use model::{ConfigSection, Configuration};
pub use path::{KEY_DELIMITER, key_path};
