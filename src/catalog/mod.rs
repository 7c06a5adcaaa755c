//! Storefront catalog and cart data shapes.
//!
//! These types mirror the JSON the storefront exchanges with its
//! rendering layer: products with per-size pricing, and cart line
//! items snapshotted from a product at add time.

mod cart;
mod product;

pub use cart::CartItem;
pub use product::{Product, ProductSize, ProductType};
