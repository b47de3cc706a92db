//! Bundle pricing.

use serde::{Deserialize, Serialize};

use atelier_catalog::{Product, StyleLook};

/// Priced bundle, all amounts in minor currency units.
///
/// Derived fresh on every request, never stored. `total = subtotal -
/// discount` and `savings = subtotal - total` hold by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    pub subtotal: u64,
    pub discount: u64,
    pub total: u64,
    pub savings: u64,
}

/// Price a bundle from the products actually being purchased.
///
/// `products` is the already-resolved member list (required slots plus any
/// optional slots the caller chose to include). The look's `total_price` is
/// display reference only and is never read here; per-product
/// `original_price` sale context stays out of bundle math as well.
///
/// The discount is `bundle_discount` percent of the subtotal, rounded
/// half-up. Percentages above 100 are clamped so the total can never go
/// negative on malformed catalog data.
pub fn price_bundle(look: &StyleLook, products: &[Product]) -> PricingResult {
    let subtotal: u64 = products.iter().map(|p| p.price).sum();

    let discount = match look.bundle_discount {
        Some(pct) => {
            let pct = u64::from(pct.min(100));
            (subtotal * pct + 50) / 100
        }
        None => 0,
    };

    let total = subtotal - discount;

    PricingResult {
        subtotal,
        discount,
        total,
        savings: subtotal - total,
    }
}
