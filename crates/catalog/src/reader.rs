//! Read-only catalog lookup port.

use std::collections::HashMap;

use atelier_core::ProductId;

use crate::look::StyleLook;
use crate::product::Product;

/// Synchronous, side-effect-free catalog resolution.
///
/// This is the entire surface the cart/styling core consumes; how the
/// catalog is actually sourced (database, API, fixtures) stays behind it.
pub trait CatalogReader {
    /// Resolve a product snapshot by id.
    fn product_by_id(&self, id: &ProductId) -> Option<Product>;

    /// Looks featuring at least one of the given products, in catalog order.
    fn looks_for_products(&self, ids: &[ProductId]) -> Vec<StyleLook>;

    /// Looks that style a single product into a complete outfit.
    fn complete_looks_for_product(&self, id: &ProductId) -> Vec<StyleLook>;
}

/// Catalog held fully in memory.
///
/// Used by tests and by sessions where the catalog has already been resolved
/// upstream into plain values.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: HashMap<ProductId, Product>,
    looks: Vec<StyleLook>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_product(&mut self, product: Product) {
        self.products.insert(product.id.clone(), product);
    }

    pub fn insert_look(&mut self, look: StyleLook) {
        self.looks.push(look);
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::new();
        for product in products {
            catalog.insert_product(product);
        }
        catalog
    }
}

impl CatalogReader for InMemoryCatalog {
    fn product_by_id(&self, id: &ProductId) -> Option<Product> {
        self.products.get(id).cloned()
    }

    fn looks_for_products(&self, ids: &[ProductId]) -> Vec<StyleLook> {
        self.looks
            .iter()
            .filter(|look| ids.iter().any(|id| look.features_product(id)))
            .cloned()
            .collect()
    }

    fn complete_looks_for_product(&self, id: &ProductId) -> Vec<StyleLook> {
        self.looks
            .iter()
            .filter(|look| look.features_product(id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::{Category, LookId};
    use crate::look::LookSlot;
    use crate::product::ProductSize;

    fn product(id: &str, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            price: 1000,
            sizes: vec![ProductSize::new("M", true)],
            images: vec![],
            category,
            in_stock: true,
            original_price: None,
            tags: vec![],
            sku: None,
        }
    }

    fn look(id: &str, slots: Vec<LookSlot>) -> StyleLook {
        StyleLook {
            id: LookId::new(id),
            name: id.to_string(),
            description: String::new(),
            image: String::new(),
            slots,
            total_price: 0,
            bundle_discount: None,
        }
    }

    #[test]
    fn product_lookup_returns_snapshot() {
        let catalog = InMemoryCatalog::with_products([product("prod-1", Category::Top)]);
        assert!(catalog.product_by_id(&ProductId::new("prod-1")).is_some());
        assert!(catalog.product_by_id(&ProductId::new("prod-2")).is_none());
    }

    #[test]
    fn looks_for_products_matches_any_member() {
        let mut catalog = InMemoryCatalog::new();
        catalog.insert_look(look(
            "look-1",
            vec![LookSlot::required("prod-a", Category::Top)],
        ));
        catalog.insert_look(look(
            "look-2",
            vec![LookSlot::required("prod-b", Category::Bottom)],
        ));

        let found =
            catalog.looks_for_products(&[ProductId::new("prod-b"), ProductId::new("prod-x")]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, LookId::new("look-2"));
    }

    #[test]
    fn complete_looks_for_product_scans_all_slots() {
        let mut catalog = InMemoryCatalog::new();
        catalog.insert_look(look(
            "look-1",
            vec![
                LookSlot::required("prod-a", Category::Top),
                LookSlot::optional("prod-c", Category::Accessories),
            ],
        ));

        assert_eq!(
            catalog
                .complete_looks_for_product(&ProductId::new("prod-c"))
                .len(),
            1
        );
        assert!(
            catalog
                .complete_looks_for_product(&ProductId::new("prod-z"))
                .is_empty()
        );
    }
}
