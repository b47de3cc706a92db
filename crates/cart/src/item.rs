use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atelier_catalog::Product;
use atelier_core::{CartItemId, ProductId};

/// One cart line item.
///
/// Embeds a full product snapshot so a persisted cart renders without the
/// catalog collaborator. Dedup identity is `(product.id, selected_size)`;
/// the line-item id stays opaque and is never derived from either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub product: Product,
    pub quantity: u32,
    pub selected_size: String,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Create a fresh line item with quantity 1.
    pub fn new(product: Product, selected_size: impl Into<String>) -> Self {
        Self {
            id: CartItemId::new(),
            product,
            quantity: 1,
            selected_size: selected_size.into(),
            added_at: Utc::now(),
        }
    }

    /// Whether this line holds the given `(product, size)` pair.
    pub fn matches(&self, product_id: &ProductId, size: &str) -> bool {
        &self.product.id == product_id && self.selected_size == size
    }

    /// Line subtotal in minor currency units.
    pub fn line_total(&self) -> u64 {
        self.product.price * u64::from(self.quantity)
    }
}
