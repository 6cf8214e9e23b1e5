//! Infrastructure layer: catalog sources and the filesystem loader.

pub mod catalog_loader;
pub mod config;

pub use catalog_loader::{CatalogLoadError, load_catalog, load_default_catalog};
pub use config::{CatalogConfig, CatalogSource};
