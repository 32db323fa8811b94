//! Core types for Sweetshop.
//!
//! This module provides type-safe wrappers for the storefront's domain
//! concepts.

pub mod cart;
pub mod key;
pub mod price;
pub mod product;

pub use cart::{Cart, CartEntry};
pub use key::ProductKey;
pub use price::Price;
pub use product::{ImageSet, Product};
