//! Catalog product types.

use serde::{Deserialize, Serialize};

use crate::types::key::ProductKey;
use crate::types::price::Price;

/// Responsive image sources for a product, as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSet {
    pub thumbnail: String,
    pub mobile: String,
    pub tablet: String,
    pub desktop: String,
}

/// A catalog product.
///
/// Sourced verbatim from the catalog file and immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: Price,
    pub image: ImageSet,
}

impl Product {
    /// The derived cart and markup key for this product.
    #[must_use]
    pub fn key(&self) -> ProductKey {
        ProductKey::derive(&self.name, self.price)
    }
}
