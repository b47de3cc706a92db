//! Default size recommendation.

use std::collections::HashMap;

use atelier_catalog::Product;
use atelier_core::ProductId;

/// Suggest one in-stock default size per product.
///
/// Advisory only: the UI pre-populates its size pickers from this map and
/// the shopper may override any entry before checkout. The first in-stock
/// size in the product's declared order wins; a product with nothing in
/// stock is simply absent from the map, and the checkout transaction later
/// skips it as unresolvable.
pub fn recommend_sizes(products: &[Product]) -> HashMap<ProductId, String> {
    products
        .iter()
        .filter_map(|product| {
            product
                .first_available_size()
                .map(|size| (product.id.clone(), size.label.clone()))
        })
        .collect()
}
