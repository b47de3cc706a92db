//! Defensive persistence adapter for the cart.
//!
//! Nothing here is permitted to propagate a failure: a hostile substrate
//! (quota limits, manual tampering, a partial write from a crashed session)
//! degrades to an empty or smaller cart, never to an error.

use serde::Serialize;
use serde_json::Value;

use atelier_storage::{KeyValueStore, StorageError};

use crate::item::CartItem;

/// Storage key holding the serialized cart document.
pub const CART_STORAGE_KEY: &str = "atelier.cart.v1";

/// Wire layout: `{ "items": [...] }`.
#[derive(Serialize)]
struct PersistedCart<'a> {
    items: &'a [CartItem],
}

/// Wraps a key/value backend under a single namespaced key.
pub struct CartPersistence {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl CartPersistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_key(store, CART_STORAGE_KEY)
    }

    pub fn with_key(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Load and validate the persisted cart.
    ///
    /// An unavailable substrate or a missing key resolves to an empty cart.
    /// A document that is not well-formed cart JSON also resolves to an
    /// empty cart **and** purges the key, so the corruption cannot recur on
    /// every subsequent read. Individually malformed items are dropped; the
    /// rest load normally.
    pub fn load(&self) -> Vec<CartItem> {
        let raw = match self.store.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(StorageError::Unavailable(_)) => return Vec::new(),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "cart read failed; starting empty");
                return Vec::new();
            }
        };

        let entries = match Self::parse_document(&raw) {
            Some(entries) => entries,
            None => {
                tracing::warn!(key = %self.key, "persisted cart is corrupted; purging");
                self.erase_best_effort();
                return Vec::new();
            }
        };

        let parsed = entries.len();
        let items: Vec<CartItem> = entries
            .into_iter()
            .filter_map(Self::validate_item)
            .collect();

        if items.len() < parsed {
            tracing::warn!(
                key = %self.key,
                dropped = parsed - items.len(),
                "dropped malformed cart items on rehydration"
            );
        }

        items
    }

    /// Persist the current items, best-effort.
    ///
    /// Serialization happens before the write ever reaches the backend; any
    /// failure is logged and swallowed — the in-memory collection stays
    /// authoritative either way.
    pub fn save(&self, items: &[CartItem]) {
        let payload = match serde_json::to_string(&PersistedCart { items }) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "cart serialization failed; write dropped");
                return;
            }
        };

        match self.store.write(&self.key, &payload) {
            Ok(()) => {}
            Err(StorageError::Unavailable(_)) => {}
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "cart write failed; write dropped");
            }
        }
    }

    /// Remove the persisted cart, best-effort.
    pub fn clear(&self) {
        self.erase_best_effort();
    }

    fn erase_best_effort(&self) {
        if let Err(err) = self.store.erase(&self.key) {
            tracing::warn!(key = %self.key, error = %err, "cart erase failed");
        }
    }

    /// A well-formed document is a JSON object with an `items` array.
    /// Anything else counts as corruption.
    fn parse_document(raw: &str) -> Option<Vec<Value>> {
        let document: Value = serde_json::from_str(raw).ok()?;
        match document.get("items") {
            Some(Value::Array(entries)) => Some(entries.clone()),
            _ => None,
        }
    }

    /// An item survives rehydration only if it deserializes into shape and
    /// carries a non-empty product id and a quantity of at least 1. The
    /// quantity ceiling is deliberately not re-checked here: bounds are
    /// enforced at the mutation boundary, not by auditing stored state.
    fn validate_item(entry: Value) -> Option<CartItem> {
        let item: CartItem = serde_json::from_value(entry).ok()?;
        if item.product.id.is_empty() || item.quantity == 0 {
            return None;
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_catalog::{Product, ProductSize};
    use atelier_core::{Category, ProductId};
    use atelier_storage::InMemoryStore;
    use std::sync::Arc;

    fn product(id: &str, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            price,
            sizes: vec![ProductSize::new("8", true)],
            images: vec![],
            category: Category::Shoes,
            in_stock: true,
            original_price: None,
            tags: vec![],
            sku: None,
        }
    }

    /// Backend that fails every operation. Stands in for a full quota or a
    /// revoked storage context.
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io(std::io::Error::other("backend down")))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("backend down")))
        }

        fn erase(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("backend down")))
        }
    }

    /// Shared handle so tests can inspect the substrate behind the adapter.
    fn shared() -> (Arc<InMemoryStore>, CartPersistence) {
        let inner = Arc::new(InMemoryStore::new());
        let persistence = CartPersistence::new(Box::new(inner.clone()));
        (inner, persistence)
    }

    #[test]
    fn missing_key_loads_as_empty() {
        let (_, persistence) = shared();
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_, persistence) = shared();
        let items = vec![CartItem::new(product("prod-1", 4500), "8")];
        persistence.save(&items);

        let loaded = persistence.load();
        assert_eq!(loaded, items);
    }

    #[test]
    fn corrupted_document_loads_empty_and_purges_the_key() {
        let (inner, persistence) = shared();
        inner.seed(CART_STORAGE_KEY, "{corrupt");

        assert!(persistence.load().is_empty());

        // Self-heal: the poisoned value must be gone, not re-read forever.
        assert_eq!(inner.read(CART_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn document_without_items_array_counts_as_corruption() {
        let (inner, persistence) = shared();
        inner.seed(CART_STORAGE_KEY, r#"{"items": 7}"#);

        assert!(persistence.load().is_empty());
        assert_eq!(inner.read(CART_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn malformed_item_is_dropped_but_the_rest_survive() {
        let (inner, persistence) = shared();
        let good = CartItem::new(product("prod-1", 4500), "8");
        let zero_quantity = CartItem {
            quantity: 0,
            ..CartItem::new(product("prod-2", 900), "8")
        };

        let document = serde_json::json!({
            "items": [good, {"garbage": true}, zero_quantity],
        });
        inner.seed(CART_STORAGE_KEY, document.to_string());

        let loaded = persistence.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].product.id, ProductId::new("prod-1"));
    }

    #[test]
    fn empty_product_id_fails_rehydration_validation() {
        let (inner, persistence) = shared();
        let item = CartItem::new(product("", 4500), "8");
        let document = serde_json::json!({ "items": [item] });
        inner.seed(CART_STORAGE_KEY, document.to_string());

        assert!(persistence.load().is_empty());
    }

    #[test]
    fn failing_backend_never_panics() {
        let persistence = CartPersistence::new(Box::new(FailingStore));

        assert!(persistence.load().is_empty());
        persistence.save(&[CartItem::new(product("prod-1", 4500), "8")]);
        persistence.clear();
    }
}
