use anyhow::Context;
use productcatalog_infra::{CatalogConfig, load_catalog};

fn main() -> anyhow::Result<()> {
    productcatalog_observability::init();

    let service_span = productcatalog_observability::tracing::service_span();
    let _entered = service_span.enter();

    let config = CatalogConfig::from_env();
    tracing::info!(file = %config.source.path().display(), "loading product catalog");

    let products = load_catalog(&config.source).with_context(|| {
        format!(
            "failed to load product catalog from {}",
            config.source.path().display()
        )
    })?;

    tracing::info!(products = products.len(), "product catalog ready");
    Ok(())
}
