//! Unified error handling for the storefront widget.
//!
//! All fallible widget operations return `Result<T, AppError>`.

use thiserror::Error;

use crate::catalog::CatalogError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog load or parse failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// A product key did not resolve to a catalog product or a rendered
    /// tile.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
