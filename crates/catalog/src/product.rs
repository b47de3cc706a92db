use serde::{Deserialize, Serialize};

use atelier_core::{Category, ProductId};

/// One size variant of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSize {
    /// Display label, e.g. `"8"` or `"M"`.
    pub label: String,
    pub in_stock: bool,
    /// On-hand quantity, when the catalog tracks it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl ProductSize {
    pub fn new(label: impl Into<String>, in_stock: bool) -> Self {
        Self {
            label: label.into(),
            in_stock,
            quantity: None,
        }
    }
}

/// Catalog product snapshot.
///
/// Prices are integer minor currency units (e.g. cents). `original_price`
/// is display-only sale context; bundle pricing never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    pub sizes: Vec<ProductSize>,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: Category,
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

impl Product {
    pub fn size(&self, label: &str) -> Option<&ProductSize> {
        self.sizes.iter().find(|s| s.label == label)
    }

    /// A size is selectable only when it exists on the product and is in
    /// stock. Unknown labels are not selectable.
    pub fn is_size_selectable(&self, label: &str) -> bool {
        self.size(label).is_some_and(|s| s.in_stock)
    }

    /// First in-stock size in declared order, if any.
    pub fn first_available_size(&self) -> Option<&ProductSize> {
        self.sizes.iter().find(|s| s.in_stock)
    }
}
