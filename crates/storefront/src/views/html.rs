//! Template-backed HTML view.
//!
//! Renders each region to an HTML fragment string with Askama and retains
//! the fragments so the host page can swap container contents wholesale
//! after each update. Tile view-models are retained too, so selection
//! changes re-render the grid without rebuilding tiles from the catalog.

use askama::Template;
use sweetshop_core::ProductKey;

use crate::error::{AppError, Result};

use super::{CartPanelView, GridView, OrderSummaryView, ProductTileView, View};

#[derive(Template)]
#[template(path = "products/grid.html")]
struct ProductGridTemplate<'a> {
    tiles: &'a [ProductTileView],
}

#[derive(Template)]
#[template(path = "partials/cart_items.html")]
struct CartItemsTemplate<'a> {
    cart: &'a CartPanelView,
}

#[derive(Template)]
#[template(path = "partials/cart_count.html")]
struct CartCountTemplate {
    count: u32,
}

#[derive(Template)]
#[template(path = "order/dialog.html")]
struct OrderDialogTemplate<'a> {
    order: &'a OrderSummaryView,
}

/// HTML fragment renderer for the storefront regions.
#[derive(Debug, Default)]
pub struct HtmlView {
    tiles: Vec<ProductTileView>,
    grid: String,
    cart: String,
    counter: String,
    dialog: String,
    dialog_open: bool,
}

impl HtmlView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current product grid fragment.
    #[must_use]
    pub fn grid_html(&self) -> &str {
        &self.grid
    }

    /// Current cart panel fragment.
    #[must_use]
    pub fn cart_html(&self) -> &str {
        &self.cart
    }

    /// Current counter badge fragment.
    #[must_use]
    pub fn cart_count_html(&self) -> &str {
        &self.counter
    }

    /// Current order dialog fragment.
    #[must_use]
    pub fn dialog_html(&self) -> &str {
        &self.dialog
    }

    /// Whether the order dialog is open.
    #[must_use]
    pub const fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    fn rebuild_grid(&mut self) -> Result<()> {
        self.grid = ProductGridTemplate {
            tiles: &self.tiles,
        }
        .render()?;
        Ok(())
    }
}

impl View for HtmlView {
    fn render_grid(&mut self, grid: &GridView) -> Result<()> {
        self.tiles = grid.tiles.clone();
        self.rebuild_grid()
    }

    fn set_product_selection(&mut self, key: &ProductKey, quantity: Option<u32>) -> Result<()> {
        let tile = self
            .tiles
            .iter_mut()
            .find(|tile| tile.key == key.as_str())
            .ok_or_else(|| AppError::NotFound(format!("product tile {key}")))?;

        tile.quantity = quantity.unwrap_or(0);
        tile.in_cart = quantity.is_some();
        self.rebuild_grid()
    }

    fn render_cart(&mut self, cart: &CartPanelView) -> Result<()> {
        self.cart = CartItemsTemplate { cart }.render()?;
        Ok(())
    }

    fn render_cart_count(&mut self, count: u32) -> Result<()> {
        self.counter = CartCountTemplate { count }.render()?;
        Ok(())
    }

    fn render_dialog(&mut self, order: &OrderSummaryView) -> Result<()> {
        // Rebuilt from scratch on every open so repeated opens never
        // accumulate stale line items.
        self.dialog = OrderDialogTemplate { order }.render()?;
        self.dialog_open = true;
        Ok(())
    }

    fn close_dialog(&mut self) {
        self.dialog_open = false;
    }
}
