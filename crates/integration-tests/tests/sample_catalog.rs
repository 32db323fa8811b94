//! The bundled nine-dessert catalog through the widget.

use std::collections::HashSet;

use sweetshop_core::ProductKey;
use sweetshop_integration_tests::{sample_catalog_path, widget_with_catalog};
use sweetshop_storefront::widget::Action;

#[test]
fn test_grid_shows_every_dessert() {
    let widget = widget_with_catalog(&sample_catalog_path());

    let state = widget.store().state();
    assert_eq!(state.products().len(), 9);

    let view = widget.view();
    assert_eq!(view.grid_html().matches("data-product-key=").count(), 9);
    assert!(view.grid_html().contains("Vanilla Bean Crème Brûlée"));
}

#[test]
fn test_keys_are_stable_and_collision_free() {
    let widget = widget_with_catalog(&sample_catalog_path());

    let keys: Vec<ProductKey> = widget
        .store()
        .state()
        .products()
        .iter()
        .map(sweetshop_core::Product::key)
        .collect();

    let unique: HashSet<&str> = keys.iter().map(ProductKey::as_str).collect();
    assert_eq!(unique.len(), 9, "sample catalog keys must not collide");

    for key in &keys {
        assert!(
            key.as_str()
                .chars()
                .all(|c| c == '-' || (c.is_alphanumeric() && !c.is_uppercase())),
            "unexpected character in {key}"
        );
    }

    // Same name, same price, same key on every derivation.
    let again: Vec<ProductKey> = widget
        .store()
        .state()
        .products()
        .iter()
        .map(sweetshop_core::Product::key)
        .collect();
    assert_eq!(keys, again);
}

#[test]
fn test_shopping_across_the_sample_catalog() {
    let mut widget = widget_with_catalog(&sample_catalog_path());

    let keys: Vec<ProductKey> = widget
        .store()
        .state()
        .products()
        .iter()
        .take(3)
        .map(sweetshop_core::Product::key)
        .collect();

    for key in &keys {
        widget
            .dispatch(Action::AddToCart(key.clone()))
            .expect("add succeeds");
    }

    // 6.50 + 7.00 + 8.00
    assert!(
        widget
            .view()
            .cart_html()
            .contains("Order Total<span>$21.50</span>")
    );
    assert_eq!(widget.store().state().cart().item_count(), 3);
}
