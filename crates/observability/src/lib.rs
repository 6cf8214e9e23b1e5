//! Logging and span export for the product catalog service.

/// Value of `service.name` on the process root span.
pub const SERVICE_NAME: &str = "productcatalogservice";

/// Install the JSON subscriber for the catalog service.
///
/// Only the first call installs anything; later calls return without effect.
pub fn init() {
    tracing::init();
}

/// Subscriber, filter, and service span setup.
pub mod tracing;
