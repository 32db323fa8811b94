//! Shared helpers for Sweetshop end-to-end tests.
//!
//! Tests drive the widget exactly the way the page does: load a catalog,
//! dispatch actions, and assert on the rendered HTML fragments.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};

use sweetshop_storefront::config::StorefrontConfig;
use sweetshop_storefront::views::html::HtmlView;
use sweetshop_storefront::widget::StorefrontWidget;

/// Path to the bundled nine-dessert sample catalog.
#[must_use]
pub fn sample_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../storefront/data.json")
}

/// Path to a fixture catalog in this crate's `testdata` directory.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

/// Widget with the HTML view and the catalog at `path` loaded.
///
/// # Panics
///
/// Panics if loading notifies a failing render.
#[must_use]
pub fn widget_with_catalog(path: &Path) -> StorefrontWidget<HtmlView> {
    let mut widget = StorefrontWidget::new(HtmlView::new());
    widget
        .load_products(&StorefrontConfig::with_catalog_path(path))
        .expect("catalog renders");
    widget
}
