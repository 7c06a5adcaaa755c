//! Cart line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::{Product, ProductSize};

/// A line item in the cart.
///
/// Snapshots the product's title, image, and per-size price at the
/// moment of adding, so later catalog edits do not reprice an existing
/// cart. The `id` is the cart's own line identifier, distinct from the
/// numeric product id, because the same product can appear once per
/// size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub size: ProductSize,
    pub price: u32,
    pub image: String,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Builds a line item from a catalog product in one size.
    ///
    /// The price is taken from the product's triple for that size and
    /// the quantity starts at 1.
    pub fn from_product(
        product: &Product,
        size: ProductSize,
        id: impl Into<String>,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: product.title.clone(),
            subtitle: product.subtitle.clone(),
            size,
            price: product.price_for(size),
            image: product.image.clone(),
            quantity: 1,
            added_at,
        }
    }

    /// Price times quantity for this line.
    pub fn line_total(&self) -> u32 {
        self.price * self.quantity
    }
}
