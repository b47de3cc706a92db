use serde::{Deserialize, Serialize};

use atelier_core::{Category, LookId, ProductId};

/// One category position within a look, filled by a default product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookSlot {
    pub product_id: ProductId,
    pub category: Category,
    /// Optional slots may be left out of the bundle without affecting the
    /// rest of the look.
    #[serde(default)]
    pub optional: bool,
}

impl LookSlot {
    pub fn required(product_id: impl Into<ProductId>, category: Category) -> Self {
        Self {
            product_id: product_id.into(),
            category,
            optional: false,
        }
    }

    pub fn optional(product_id: impl Into<ProductId>, category: Category) -> Self {
        Self {
            product_id: product_id.into(),
            category,
            optional: true,
        }
    }
}

/// A curated "complete the look" bundle.
///
/// `total_price` is the pre-discount reference price shown on look cards;
/// checkout pricing is always recomputed from the resolved products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleLook {
    pub id: LookId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub slots: Vec<LookSlot>,
    pub total_price: u64,
    /// Whole-percent discount off the summed member prices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_discount: Option<u8>,
}

impl StyleLook {
    pub fn slot_for(&self, category: Category) -> Option<&LookSlot> {
        self.slots.iter().find(|s| s.category == category)
    }

    pub fn required_slots(&self) -> impl Iterator<Item = &LookSlot> {
        self.slots.iter().filter(|s| !s.optional)
    }

    /// Default member product ids, in slot order.
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.slots.iter().map(|s| s.product_id.clone()).collect()
    }

    pub fn features_product(&self, id: &ProductId) -> bool {
        self.slots.iter().any(|s| &s.product_id == id)
    }
}
