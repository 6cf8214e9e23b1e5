//! Tracing/logging initialization.

use tracing::Span;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::SERVICE_NAME;

/// Default filter when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info";

/// Keeps the `load-catalog` span (an INFO span) enabled under any `RUST_LOG`, so
/// every catalog load is exported with its `catalog.*` fields.
const CATALOG_LOADER_DIRECTIVE: &str = "productcatalog_infra::catalog_loader=info";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // JSON logs + timestamps, configurable via RUST_LOG. Span close events carry
    // the span's recorded fields and its duration.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(with_catalog_spans(filter))
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Add the catalog loader directive on top of `filter`.
pub fn with_catalog_spans(filter: EnvFilter) -> EnvFilter {
    match CATALOG_LOADER_DIRECTIVE.parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Root span for the service process, tagged with [`SERVICE_NAME`].
///
/// Spans opened while this one is entered are parented to it.
pub fn service_span() -> Span {
    ::tracing::info_span!("service", service.name = SERVICE_NAME)
}
