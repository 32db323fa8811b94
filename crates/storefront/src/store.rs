//! Observable application state.
//!
//! [`Store`] holds the catalog and the cart and notifies subscribers on
//! every top-level assignment, passing the new and previous snapshots.
//! All cart changes go through [`Store::update_cart`], so each mutation
//! produces exactly one synchronous notification in subscriber
//! registration order.

use std::sync::Arc;

use sweetshop_core::{Cart, Product};

use crate::error::Result;

/// Snapshot of the storefront state.
///
/// `products` sits behind an `Arc` so subscribers can tell a catalog
/// reassignment apart from a cart-only change by identity
/// ([`StoreState::same_products`]).
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    products: Arc<Vec<Product>>,
    cart: Cart,
}

impl StoreState {
    /// The loaded catalog, in file order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The current cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Whether `other` holds the identical products allocation.
    #[must_use]
    pub fn same_products(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.products, &other.products)
    }
}

/// Subscriber callback, invoked with `(new, old)` snapshots.
pub type Subscriber = Box<dyn FnMut(&StoreState, &StoreState) -> Result<()>>;

/// Observable state container.
#[derive(Default)]
pub struct Store {
    state: StoreState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Register a subscriber.
    ///
    /// Subscribers run in registration order on every mutation; there is
    /// no deduplication and no unsubscribe.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&StoreState, &StoreState) -> Result<()> + 'static,
    ) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Replace the catalog and notify subscribers.
    ///
    /// # Errors
    ///
    /// Propagates the first subscriber failure; later subscribers are not
    /// invoked.
    pub fn set_products(&mut self, products: Vec<Product>) -> Result<()> {
        let old = self.state.clone();
        self.state.products = Arc::new(products);
        self.notify(&old)
    }

    /// Replace the cart and notify subscribers.
    ///
    /// # Errors
    ///
    /// Propagates the first subscriber failure; later subscribers are not
    /// invoked.
    pub fn update_cart(&mut self, cart: Cart) -> Result<()> {
        let old = self.state.clone();
        self.state.cart = cart;
        self.notify(&old)
    }

    fn notify(&mut self, old: &StoreState) -> Result<()> {
        let state = &self.state;
        for subscriber in &mut self.subscribers {
            subscriber(state, old)?;
        }
        Ok(())
    }
}
