//! Authoritative cart collection and derived totals.

use atelier_catalog::Product;
use atelier_core::CartItemId;
use atelier_storage::InMemoryStore;

use crate::item::CartItem;
use crate::persistence::CartPersistence;

/// Ceiling on a single line item's quantity.
pub const MAX_QUANTITY: u32 = 10;

/// The shopping cart.
///
/// One instance per application session, owned by the composition root.
/// `&mut self` on every mutation gives the single-logical-owner model of
/// the wider system its compile-time enforcement; no locking is involved.
///
/// Invariants held at every mutation boundary:
/// - at most one line per `(product.id, selected_size)` pair,
/// - every quantity in `1..=MAX_QUANTITY`,
/// - insertion order is display order.
pub struct CartStore {
    items: Vec<CartItem>,
    hydrated: bool,
    persistence: CartPersistence,
}

impl CartStore {
    /// Create an unhydrated store.
    ///
    /// The store is fully functional before [`hydrate`](Self::hydrate) runs;
    /// mutations are kept in memory and only flushed to the substrate once
    /// hydration has merged any previously persisted items, so an early add
    /// cannot clobber a durable cart it has not seen yet.
    pub fn new(persistence: CartPersistence) -> Self {
        Self {
            items: Vec::new(),
            hydrated: false,
            persistence,
        }
    }

    /// Create and immediately hydrate a store. The normal entry point.
    pub fn open(persistence: CartPersistence) -> Self {
        let mut store = Self::new(persistence);
        store.hydrate();
        store
    }

    /// Store with no durable substrate; for tests and ephemeral sessions.
    pub fn in_memory() -> Self {
        Self::open(CartPersistence::new(Box::new(InMemoryStore::new())))
    }

    /// Run the initial load-and-validate pass.
    ///
    /// Completes regardless of what the substrate returns: a missing,
    /// corrupted, or partially valid persisted cart always resolves to a
    /// valid (possibly empty) collection. Items added before hydration are
    /// merged on top of the persisted ones under the usual dedup rule.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            return;
        }

        let pre_hydration = std::mem::take(&mut self.items);
        self.items = self.persistence.load();

        for item in pre_hydration {
            match self
                .items
                .iter_mut()
                .find(|existing| existing.matches(&item.product.id, &item.selected_size))
            {
                Some(existing) => {
                    existing.quantity = (existing.quantity + item.quantity).min(MAX_QUANTITY);
                }
                None => self.items.push(item),
            }
        }

        self.hydrated = true;
        if !self.items.is_empty() {
            self.persist();
        }
    }

    /// Whether the initial load-and-validate pass has completed.
    ///
    /// Consumers may use this to suppress premature "empty cart" rendering.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Add one unit of `product` in the given size.
    ///
    /// An existing `(product, size)` line is incremented instead of
    /// duplicated; at [`MAX_QUANTITY`] the increment is a no-op, not an
    /// error. Returns the id of the affected line.
    pub fn add_item(&mut self, product: &Product, size: &str) -> CartItemId {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.matches(&product.id, size))
        {
            if existing.quantity < MAX_QUANTITY {
                existing.quantity += 1;
            }
            let id = existing.id;
            self.persist();
            return id;
        }

        let item = CartItem::new(product.clone(), size);
        let id = item.id;
        self.items.push(item);
        self.persist();
        id
    }

    /// Delete a line item. No-op if absent.
    pub fn remove_item(&mut self, id: CartItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() != before {
            self.persist();
        }
    }

    /// Set a line item's quantity.
    ///
    /// Anything at or below zero removes the line. Values above the ceiling
    /// clamp to [`MAX_QUANTITY`]. No-op for an unknown id.
    pub fn set_quantity(&mut self, id: CartItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        let clamped = quantity.min(i64::from(MAX_QUANTITY)) as u32;
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = clamped;
            self.persist();
        }
    }

    /// Empty the cart and drop the persisted document.
    pub fn clear(&mut self) {
        self.items.clear();
        if self.hydrated {
            self.persistence.clear();
        }
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cart total in minor currency units.
    pub fn total(&self) -> u64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total unit count across all lines (not the number of lines).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    fn persist(&self) {
        if self.hydrated {
            self.persistence.save(&self.items);
        }
    }
}
