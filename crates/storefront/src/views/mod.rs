//! View layer: render capability trait and display view-models.
//!
//! Core cart logic stays independent of any rendering target. Subscribers
//! hand prebuilt view-models with preformatted prices to a [`View`]; the
//! view owns the markup regions and fully replaces a region on each render.

pub mod html;

use sweetshop_core::{Cart, Price, ProductKey};

use crate::error::Result;
use crate::store::StoreState;

/// Product tile display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductTileView {
    /// Derived product key, emitted as the tile's `data-product-key`.
    pub key: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub image_mobile: String,
    pub image_tablet: String,
    pub image_desktop: String,
    pub in_cart: bool,
    pub quantity: u32,
}

/// Product grid display data.
#[derive(Debug, Clone, Default)]
pub struct GridView {
    pub tiles: Vec<ProductTileView>,
}

impl GridView {
    /// Build grid tiles from the current state, including in-cart flags.
    #[must_use]
    pub fn from_state(state: &StoreState) -> Self {
        let tiles = state
            .products()
            .iter()
            .map(|product| {
                let key = product.key();
                let quantity = state.cart().quantity_of(&key).unwrap_or(0);
                ProductTileView {
                    key: key.to_string(),
                    name: product.name.clone(),
                    category: product.category.clone(),
                    price: format_price(product.price),
                    image_mobile: product.image.mobile.clone(),
                    image_tablet: product.image.tablet.clone(),
                    image_desktop: product.image.desktop.clone(),
                    in_cart: quantity > 0,
                    quantity,
                }
            })
            .collect();
        Self { tiles }
    }
}

/// Cart line display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub key: String,
    pub name: String,
    pub thumbnail: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart panel display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanelView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl CartPanelView {
    /// An empty cart panel.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: format_price(Price::ZERO),
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartPanelView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .iter()
                .map(|(key, entry)| CartItemView {
                    key: key.to_string(),
                    name: entry.product.name.clone(),
                    thumbnail: entry.product.image.thumbnail.clone(),
                    quantity: entry.quantity,
                    price: format_price(entry.product.price),
                    line_price: format_price(entry.line_total()),
                })
                .collect(),
            total: format_price(cart.order_total()),
            item_count: cart.item_count(),
        }
    }
}

/// Order confirmation dialog display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummaryView {
    pub items: Vec<CartItemView>,
    pub total: String,
}

impl From<&Cart> for OrderSummaryView {
    fn from(cart: &Cart) -> Self {
        let panel = CartPanelView::from(cart);
        Self {
            items: panel.items,
            total: panel.total,
        }
    }
}

/// Format a price for display, e.g. `$6.50`.
#[must_use]
pub fn format_price(price: Price) -> String {
    format!("${price}")
}

/// Rendering target for the widget.
///
/// Implementations own the markup regions; each render fully replaces the
/// corresponding region and is idempotent for identical input.
pub trait View {
    /// Rebuild the product grid from tile view-models.
    ///
    /// # Errors
    ///
    /// Fails when the grid markup cannot be produced.
    fn render_grid(&mut self, grid: &GridView) -> Result<()>;

    /// Update one tile's in-cart state without rebuilding the grid.
    /// `quantity` is `None` when the product left the cart.
    ///
    /// # Errors
    ///
    /// Fails when no tile exists for `key`.
    fn set_product_selection(&mut self, key: &ProductKey, quantity: Option<u32>) -> Result<()>;

    /// Replace the cart panel contents.
    ///
    /// # Errors
    ///
    /// Fails when the panel markup cannot be produced.
    fn render_cart(&mut self, cart: &CartPanelView) -> Result<()>;

    /// Update the item counter badge.
    ///
    /// # Errors
    ///
    /// Fails when the badge markup cannot be produced.
    fn render_cart_count(&mut self, count: u32) -> Result<()>;

    /// Rebuild the order dialog from scratch and open it.
    ///
    /// # Errors
    ///
    /// Fails when the dialog markup cannot be produced.
    fn render_dialog(&mut self, order: &OrderSummaryView) -> Result<()>;

    /// Close the order dialog.
    fn close_dialog(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweetshop_core::{ImageSet, Product};

    fn product(name: &str, cents: i64) -> Product {
        Product {
            name: name.to_owned(),
            category: "Dessert".to_owned(),
            price: Price::from_cents(cents),
            image: ImageSet {
                thumbnail: "thumb.jpg".to_owned(),
                mobile: "mobile.jpg".to_owned(),
                tablet: "tablet.jpg".to_owned(),
                desktop: "desktop.jpg".to_owned(),
            },
        }
    }

    #[test]
    fn test_cart_panel_preformats_prices() {
        let mut cart = Cart::new();
        let key = cart.add(product("Waffle with Berries", 650));
        cart.increment(&key);

        let panel = CartPanelView::from(&cart);
        let item = panel.items.first().expect("one line item");

        assert_eq!(item.quantity, 2);
        assert_eq!(item.price, "$6.50");
        assert_eq!(item.line_price, "$13.00");
        assert_eq!(panel.total, "$13.00");
        assert_eq!(panel.item_count, 2);
    }

    #[test]
    fn test_empty_panel() {
        let panel = CartPanelView::empty();
        assert!(panel.items.is_empty());
        assert_eq!(panel.total, "$0.00");
        assert_eq!(panel.item_count, 0);
    }

    #[test]
    fn test_order_summary_matches_panel_lines() {
        let mut cart = Cart::new();
        cart.add(product("Classic Tiramisu", 550));

        let summary = OrderSummaryView::from(&cart);
        assert_eq!(summary.items, CartPanelView::from(&cart).items);
        assert_eq!(summary.total, "$5.50");
    }
}
