//! Storefront service: cart + customization session + catalog, composed.

use std::collections::HashMap;

use atelier_cart::CartStore;
use atelier_catalog::{CatalogReader, Product, StyleLook};
use atelier_core::{CartItemId, Category, ProductId};
use atelier_styling::{LookSession, PricingResult, price_bundle, recommend_sizes};

use crate::checkout::{LookCheckoutOutcome, SlotOutcome, SlotReport};

/// The one stateful service of the cart core.
///
/// Constructed at the application's composition root and injected where
/// needed; tests build isolated instances instead of resetting shared
/// globals.
pub struct StorefrontService<C: CatalogReader> {
    catalog: C,
    cart: CartStore,
    session: LookSession,
}

impl<C: CatalogReader> StorefrontService<C> {
    pub fn new(catalog: C, cart: CartStore) -> Self {
        Self {
            catalog,
            cart,
            session: LookSession::new(),
        }
    }

    /// Service over an ephemeral in-memory cart; for tests and previews.
    pub fn in_memory(catalog: C) -> Self {
        Self::new(catalog, CartStore::in_memory())
    }

    // --- cart surface ----------------------------------------------------

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn add_item(&mut self, product: &Product, size: &str) -> CartItemId {
        self.cart.add_item(product, size)
    }

    pub fn remove_item(&mut self, id: CartItemId) {
        self.cart.remove_item(id);
    }

    pub fn set_quantity(&mut self, id: CartItemId, quantity: i64) {
        self.cart.set_quantity(id, quantity);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    // --- customization surface -------------------------------------------

    pub fn session(&self) -> &LookSession {
        &self.session
    }

    pub fn set_current_look(&mut self, look: StyleLook) {
        self.session.set_current_look(look);
    }

    pub fn customize_product(&mut self, category: Category, product_id: ProductId) {
        self.session.customize_product(category, product_id);
    }

    pub fn reset_customization(&mut self) {
        self.session.reset_customization();
    }

    // --- look resolution -------------------------------------------------

    /// The effective member products of a look under the current overrides,
    /// in slot order. Slots whose product cannot be resolved are omitted.
    pub fn resolve_bundle_products(&self, look: &StyleLook) -> Vec<Product> {
        look.slots
            .iter()
            .filter_map(|slot| {
                self.catalog
                    .product_by_id(self.session.effective_product_id(slot))
            })
            .collect()
    }

    /// Price a look as currently customized.
    pub fn price_look(&self, look: &StyleLook) -> PricingResult {
        price_bundle(look, &self.resolve_bundle_products(look))
    }

    /// Default size per resolvable member of a look, for pre-populating the
    /// size pickers shown before checkout.
    pub fn recommended_sizes_for(&self, look: &StyleLook) -> HashMap<ProductId, String> {
        recommend_sizes(&self.resolve_bundle_products(look))
    }

    // --- checkout-into-cart ----------------------------------------------

    /// Add an entire look to the cart as one logical operation.
    ///
    /// Slots are processed in look order; each one resolves its effective
    /// product (override first, then the slot default), then its requested
    /// size from `size_selections`, keyed by effective product id. A slot
    /// whose product is unresolvable, whose size is missing, or whose size
    /// is not selectable is skipped without raising — the shortfall shows
    /// up only in the returned outcome. The customization overrides are
    /// cleared whether or not anything was added: an attempted checkout
    /// always ends the customization session.
    pub fn add_complete_look_to_cart(
        &mut self,
        look: &StyleLook,
        size_selections: &HashMap<ProductId, String>,
    ) -> LookCheckoutOutcome {
        let mut slots = Vec::with_capacity(look.slots.len());
        let mut count = 0u32;

        for slot in &look.slots {
            let product_id = self.session.effective_product_id(slot).clone();

            let outcome = match self.catalog.product_by_id(&product_id) {
                None => SlotOutcome::MissingProduct { product_id },
                Some(product) => match size_selections.get(&product.id) {
                    None => SlotOutcome::MissingSize { product_id },
                    Some(size) if !product.is_size_selectable(size) => {
                        SlotOutcome::SizeUnavailable {
                            product_id,
                            size: size.clone(),
                        }
                    }
                    Some(size) => {
                        self.cart.add_item(&product, size);
                        count += 1;
                        SlotOutcome::Added {
                            product_id,
                            size: size.clone(),
                        }
                    }
                },
            };

            if !outcome.is_added() {
                tracing::debug!(look = %look.id, category = %slot.category, ?outcome, "slot skipped");
            }
            slots.push(SlotReport {
                category: slot.category,
                outcome,
            });
        }

        self.session.reset_customization();

        LookCheckoutOutcome {
            success: count > 0,
            count,
            slots,
        }
    }
}
