//! Storefront configuration.
//!
//! The widget has no environment or CLI surface; configuration is a plain
//! value constructed by the host page, defaulting to the catalog's fixed
//! relative path.

use std::path::PathBuf;

/// Default relative location of the catalog document.
pub const DEFAULT_CATALOG_PATH: &str = "data.json";

/// Storefront widget configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Path to the JSON product catalog.
    pub catalog_path: PathBuf,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
        }
    }
}

impl StorefrontConfig {
    /// Configuration pointing at a specific catalog file.
    #[must_use]
    pub fn with_catalog_path(path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: path.into(),
        }
    }
}
