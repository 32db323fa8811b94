//! Deterministic product keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::price::Price;

/// Identifier derived from a product's name and price.
///
/// Keys are lowercase slugs (alphanumerics separated by single hyphens),
/// stable across calls, and double as the cart map key and the markup
/// lookup attribute. Two products sharing a name and price collide; the
/// catalog carries no such pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductKey(String);

impl ProductKey {
    /// Derive the key for a name and price.
    ///
    /// The price contributes its two-decimal form, so `6.5` and `6.50`
    /// derive the same key.
    #[must_use]
    pub fn derive(name: &str, price: Price) -> Self {
        Self(slugify(&format!("{name}-{price}")))
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for ProductKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Lowercase the input and collapse every run of non-alphanumeric
/// characters into a single hyphen.
fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_owned()
}
