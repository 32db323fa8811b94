//! Sweetshop Core - shared domain types.
//!
//! This crate provides the common types used across the Sweetshop
//! components:
//! - `storefront` - The storefront widget (grid, cart, order dialog)
//! - `integration-tests` - End-to-end tests against the rendered widget
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no
//! rendering, no templates. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Prices, product keys, catalog products, and the cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
