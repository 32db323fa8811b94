//! Catalog loading.
//!
//! The catalog is a JSON array of products at a fixed relative path, read
//! once when the page initializes. Entries are taken verbatim; there is
//! no schema validation beyond deserialization, and no retry.

use std::path::{Path, PathBuf};

use sweetshop_core::Product;
use thiserror::Error;

/// Errors from reading or parsing the catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load the product catalog from `path`, in file order.
///
/// # Errors
///
/// Returns [`CatalogError`] if the file cannot be read or is not a JSON
/// array of products.
pub fn load(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}
