//! Process-level span shared by every log line of a binary.

use std::fmt::Display;

use tracing::Span;
use tracing::span::EnteredSpan;

use crate::init::build_sha;

/// Span carrying `process` and `build_sha`, for instrumenting async work.
#[must_use]
pub fn process_span(process: &'static str) -> Span {
    tracing::info_span!("storefront", process, build_sha = build_sha())
}

/// Keeps the process span entered until dropped.
///
/// Every event emitted while the guard lives carries `process` and
/// `build_sha`, plus `run_id` when one was given.
#[must_use = "the process span is exited when the guard is dropped"]
pub struct GlobalContextGuard {
    _span: EnteredSpan,
}

impl GlobalContextGuard {
    /// Enter the span for `process`.
    pub fn new(process: &'static str) -> Self {
        Self {
            _span: process_span(process).entered(),
        }
    }

    /// Enter the span for one run of `process`.
    pub fn for_run(process: &'static str, run_id: impl Display) -> Self {
        let span = tracing::info_span!(
            "storefront",
            process,
            build_sha = build_sha(),
            run_id = %run_id
        );
        Self {
            _span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guards_enter_and_exit() {
        let guard = GlobalContextGuard::new("storefront");
        tracing::info!("inside process span");
        drop(guard);

        let run = GlobalContextGuard::for_run("process-order", 7);
        tracing::info!("inside run span");
        drop(run);
    }

    #[test]
    fn process_span_is_named_for_the_workspace() {
        let _subscriber = tracing::subscriber::set_default(tracing_subscriber::registry());
        let span = process_span("storefront");
        assert_eq!(span.metadata().map(|meta| meta.name()), Some("storefront"));
    }
}
