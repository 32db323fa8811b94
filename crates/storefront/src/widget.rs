//! Storefront controller.
//!
//! Wires user actions to store mutations and store notifications to view
//! renders. Two subscribers are registered at construction, in the same
//! order the page wires them: the product grid first, then the cart panel
//! and counter badge.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use sweetshop_core::{Cart, Product, ProductKey};

use crate::catalog;
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::store::Store;
use crate::views::{CartPanelView, GridView, OrderSummaryView, View};

/// A user interaction, as mapped from the host page's events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Click on a tile's "Add to cart" button.
    AddToCart(ProductKey),
    /// Click on a tile's increment button.
    Increment(ProductKey),
    /// Click on a tile's decrement button.
    Decrement(ProductKey),
    /// Click on a cart line's remove button.
    Remove(ProductKey),
    /// Click on the cart panel's confirm button.
    ConfirmOrder,
    /// Click on the dialog's start-new-order button.
    StartNewOrder,
}

/// The storefront widget: an observable store plus a rendering target.
pub struct StorefrontWidget<V> {
    store: Store,
    view: Rc<RefCell<V>>,
}

impl<V: View + 'static> StorefrontWidget<V> {
    /// Build the widget and register the render subscribers.
    pub fn new(view: V) -> Self {
        let view = Rc::new(RefCell::new(view));
        let mut store = Store::new();

        let grid_view = Rc::clone(&view);
        store.subscribe(move |state, old| {
            let mut view = grid_view.borrow_mut();
            if state.same_products(old) {
                // Cart-only change: sync tile selections, skip the rebuild.
                for product in state.products() {
                    let key = product.key();
                    view.set_product_selection(&key, state.cart().quantity_of(&key))?;
                }
                Ok(())
            } else {
                view.render_grid(&GridView::from_state(state))
            }
        });

        let cart_view = Rc::clone(&view);
        store.subscribe(move |state, _old| {
            let mut view = cart_view.borrow_mut();
            view.render_cart(&CartPanelView::from(state.cart()))?;
            view.render_cart_count(state.cart().item_count())
        });

        Self { store, view }
    }

    /// Load the catalog and render the grid.
    ///
    /// A load failure is logged and leaves the catalog empty: the grid
    /// stays empty and the widget remains usable. There is no retry; the
    /// user can reload the page.
    ///
    /// # Errors
    ///
    /// Propagates subscriber render failures.
    pub fn load_products(&mut self, config: &StorefrontConfig) -> Result<()> {
        match catalog::load(&config.catalog_path) {
            Ok(products) => {
                tracing::info!(count = products.len(), "loaded product catalog");
                self.store.set_products(products)
            }
            Err(e) => {
                tracing::error!("failed to load product catalog: {e}");
                Ok(())
            }
        }
    }

    /// Apply a user action.
    ///
    /// Increment and decrement on a product that is not in the cart are
    /// no-ops without a notification; remove always notifies, as the page
    /// re-renders unconditionally on remove.
    ///
    /// # Errors
    ///
    /// `AddToCart` with a key that matches no catalog product fails with
    /// [`AppError::NotFound`]; subscriber render failures propagate.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::AddToCart(key) => {
                let product = self.product_by_key(&key)?;
                let mut cart = self.store.state().cart().clone();
                cart.add(product);
                self.store.update_cart(cart)
            }
            Action::Increment(key) => {
                if !self.store.state().cart().contains(&key) {
                    return Ok(());
                }
                let mut cart = self.store.state().cart().clone();
                cart.increment(&key);
                self.store.update_cart(cart)
            }
            Action::Decrement(key) => {
                if !self.store.state().cart().contains(&key) {
                    return Ok(());
                }
                let mut cart = self.store.state().cart().clone();
                cart.decrement(&key);
                self.store.update_cart(cart)
            }
            Action::Remove(key) => {
                let mut cart = self.store.state().cart().clone();
                cart.remove(&key);
                self.store.update_cart(cart)
            }
            Action::ConfirmOrder => {
                let order = OrderSummaryView::from(self.store.state().cart());
                self.view.borrow_mut().render_dialog(&order)
            }
            Action::StartNewOrder => {
                self.view.borrow_mut().close_dialog();
                self.store.update_cart(Cart::default())
            }
        }
    }

    /// The observable store backing the widget.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Borrow the rendering target.
    ///
    /// # Panics
    ///
    /// Panics if called while a notification is mid-render.
    #[must_use]
    pub fn view(&self) -> Ref<'_, V> {
        self.view.borrow()
    }

    fn product_by_key(&self, key: &ProductKey) -> Result<Product> {
        self.store
            .state()
            .products()
            .iter()
            .find(|product| product.key() == *key)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("product {key}")))
    }
}
