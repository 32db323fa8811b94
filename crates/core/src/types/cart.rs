//! Cart state and arithmetic.

use indexmap::IndexMap;

use crate::types::key::ProductKey;
use crate::types::price::Price;
use crate::types::product::Product;

/// A product in the cart with its quantity.
///
/// Entries exist only while the quantity is positive; [`Cart`] removes
/// them when a decrement reaches zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// The shopping cart: an insertion-ordered map from product key to entry.
///
/// Mutations here never notify anyone; the storefront's store owns the
/// clone-mutate-replace cycle that drives renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: IndexMap<ProductKey, CartEntry>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product with quantity 1 and return its key.
    ///
    /// Re-adding a product that is already in the cart resets its
    /// quantity to 1. The storefront hides the add button while a product
    /// is in the cart, so that path is unreachable from the page.
    pub fn add(&mut self, product: Product) -> ProductKey {
        let key = product.key();
        self.entries.insert(key.clone(), CartEntry::new(product));
        key
    }

    /// Increase an entry's quantity by one. Absent keys are ignored.
    pub fn increment(&mut self, key: &ProductKey) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.quantity += 1;
        }
    }

    /// Decrease an entry's quantity by one, removing the entry when it
    /// reaches zero. Absent keys are ignored.
    pub fn decrement(&mut self, key: &ProductKey) {
        let Some(entry) = self.entries.get_mut(key) else {
            return;
        };
        entry.quantity -= 1;
        if entry.quantity == 0 {
            self.entries.shift_remove(key);
        }
    }

    /// Remove an entry unconditionally.
    pub fn remove(&mut self, key: &ProductKey) {
        self.entries.shift_remove(key);
    }

    #[must_use]
    pub fn get(&self, key: &ProductKey) -> Option<&CartEntry> {
        self.entries.get(key)
    }

    /// The quantity for `key`, or `None` when the product is not in the
    /// cart.
    #[must_use]
    pub fn quantity_of(&self, key: &ProductKey) -> Option<u32> {
        self.entries.get(key).map(|entry| entry.quantity)
    }

    #[must_use]
    pub fn contains(&self, key: &ProductKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Sum of price times quantity over all entries.
    #[must_use]
    pub fn order_total(&self) -> Price {
        self.entries.values().map(CartEntry::line_total).sum()
    }

    /// Sum of quantities over all entries.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.entries.values().map(|entry| entry.quantity).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductKey, &CartEntry)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::product::ImageSet;

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
    fn test_add_then_remove_leaves_cart_empty() {
        let mut cart = Cart::new();
        let key = cart.add(product("Classic Tiramisu", 550));
        assert_eq!(cart.quantity_of(&key), Some(1));

        cart.remove(&key);
        assert!(cart.is_empty());
        assert_eq!(cart, Cart::new());
    }

    #[test]
    fn test_decrement_at_one_removes_entry() {
        let mut cart = Cart::new();
        let key = cart.add(product("Lemon Meringue Pie", 500));

        cart.decrement(&key);
        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of(&key), None);
    }

    #[test]
    fn test_increment_and_decrement_adjust_quantity() {
        let mut cart = Cart::new();
        let key = cart.add(product("Pistachio Baklava", 400));

        cart.increment(&key);
        cart.increment(&key);
        assert_eq!(cart.quantity_of(&key), Some(3));

        cart.decrement(&key);
        assert_eq!(cart.quantity_of(&key), Some(2));
    }

    #[test]
    fn test_missing_keys_are_ignored() {
        let mut cart = Cart::new();
        let key = ProductKey::derive("Red Velvet Cake", Price::from_cents(450));

        cart.increment(&key);
        cart.decrement(&key);
        cart.remove(&key);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_order_total_is_additive() {
        let mut cart = Cart::new();
        let a = cart.add(product("A", 500));
        cart.increment(&a);
        cart.add(product("B", 300));

        assert_eq!(cart.order_total(), Price::from_cents(1300));
        assert_eq!(cart.order_total().to_string(), "13.00");
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = Cart::new();
        let a = cart.add(product("A", 500));
        cart.increment(&a);
        cart.add(product("B", 300));

        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_readd_resets_quantity() {
        let mut cart = Cart::new();
        let key = cart.add(product("Vanilla Panna Cotta", 650));
        cart.increment(&key);

        cart.add(product("Vanilla Panna Cotta", 650));
        assert_eq!(cart.quantity_of(&key), Some(1));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(product("Waffle with Berries", 650));
        cart.add(product("Classic Tiramisu", 550));
        cart.add(product("Pistachio Baklava", 400));

        let names: Vec<&str> = cart
            .iter()
            .map(|(_, entry)| entry.product.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["Waffle with Berries", "Classic Tiramisu", "Pistachio Baklava"]
        );
    }
}
