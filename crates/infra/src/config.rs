//! Catalog source configuration.

use std::path::{Path, PathBuf};

/// File name of the catalog when nothing else is configured.
pub const DEFAULT_CATALOG_FILE: &str = "products.json";

/// Environment variable the service reads to override the catalog file.
pub const CATALOG_FILE_ENV: &str = "PRODUCT_CATALOG_FILE";

/// Where the catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A JSON file on the local filesystem. Relative paths resolve against the
    /// process's working directory at load time.
    LocalFile { path: PathBuf },
}

impl CatalogSource {
    pub fn local_file(path: impl Into<PathBuf>) -> Self {
        Self::LocalFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        match self {
            CatalogSource::LocalFile { path } => path,
        }
    }

    /// Tag recorded as `catalog.source` on the load span.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogSource::LocalFile { .. } => "local-file",
        }
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::local_file(DEFAULT_CATALOG_FILE)
    }
}

/// Catalog configuration for the service process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    pub source: CatalogSource,
}

impl CatalogConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = lookup(CATALOG_FILE_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(CatalogSource::local_file)
            .unwrap_or_default();

        Self { source }
    }
}
