//! Loads the product catalog from its configured source.
//!
//! Every call re-reads and re-decodes the source; nothing is cached. Each load
//! runs inside one `load-catalog` span carrying:
//!
//! - `catalog.source` / `catalog.file`: recorded before the read
//! - `catalog.product_count`: recorded only when decoding succeeded
//! - `error` / `otel.status_code`: recorded only on failure
//!
//! The span is an INFO span under this module's target; the service's filter
//! keeps that target enabled whatever `RUST_LOG` says.

use productcatalog_products::{Catalog, Product};
use thiserror::Error;
use tracing::{Span, field};

use crate::config::CatalogSource;

/// Failure to load the catalog. The underlying error is forwarded untouched.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The catalog file could not be opened or read.
    #[error(transparent)]
    Read(#[from] std::io::Error),

    /// The file contents are not JSON, or not shaped like `{ "products": [...] }`.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

/// Load all products from `source`.
pub fn load_catalog(source: &CatalogSource) -> Result<Vec<Product>, CatalogLoadError> {
    let span = tracing::info_span!(
        "load-catalog",
        otel.kind = "internal",
        catalog.source = field::Empty,
        catalog.file = field::Empty,
        catalog.product_count = field::Empty,
        otel.status_code = field::Empty,
        error = field::Empty,
    );
    let _entered = span.enter();

    let path = source.path();
    span.record("catalog.source", source.kind());
    span.record("catalog.file", field::display(path.display()));

    let data = std::fs::read(path).map_err(|err| record_failure(&span, err.into()))?;

    // A bare `null` document is an empty catalog, like a missing `products` key.
    let catalog: Catalog = serde_json::from_slice::<Option<Catalog>>(&data)
        .map_err(|err| record_failure(&span, err.into()))?
        .unwrap_or_default();

    span.record("catalog.product_count", catalog.len());
    tracing::debug!(products = catalog.len(), "catalog loaded");

    Ok(catalog.into_products())
}

/// Load from `products.json` in the current working directory.
pub fn load_default_catalog() -> Result<Vec<Product>, CatalogLoadError> {
    load_catalog(&CatalogSource::default())
}

fn record_failure(span: &Span, err: CatalogLoadError) -> CatalogLoadError {
    span.record("otel.status_code", "ERROR");
    span.record("error", field::display(&err));
    tracing::error!(error = %err, "failed to load catalog");
    err
}
