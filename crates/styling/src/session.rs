//! Session-scoped look customization overlay.

use std::collections::HashMap;

use atelier_catalog::{LookSlot, StyleLook};
use atelier_core::{Category, ProductId};

/// Customization state for "the look currently being customized".
///
/// Lifecycle: idle until a look is opened, customizing until the overrides
/// are cleared (explicitly, or unconditionally by the checkout-into-cart
/// transaction). There is no error state; the session always returns to
/// idle.
///
/// Overrides deliberately survive [`set_current_look`](Self::set_current_look):
/// re-opening the same or a different look within one customization session
/// keeps the shopper's substitutions until they are explicitly reset.
#[derive(Debug, Default)]
pub struct LookSession {
    current_look: Option<StyleLook>,
    overrides: HashMap<Category, ProductId>,
}

impl LookSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a look for customization, replacing any previous one.
    pub fn set_current_look(&mut self, look: StyleLook) {
        self.current_look = Some(look);
    }

    pub fn current_look(&self) -> Option<&StyleLook> {
        self.current_look.as_ref()
    }

    /// Substitute a product for a category slot. At most one override per
    /// category; a second call overwrites the first.
    pub fn customize_product(&mut self, category: Category, product_id: ProductId) {
        self.overrides.insert(category, product_id);
    }

    /// Clear all overrides.
    pub fn reset_customization(&mut self) {
        self.overrides.clear();
    }

    pub fn override_for(&self, category: Category) -> Option<&ProductId> {
        self.overrides.get(&category)
    }

    pub fn has_customizations(&self) -> bool {
        !self.overrides.is_empty()
    }

    /// The product a slot resolves to: the category override when present,
    /// else the slot's default.
    pub fn effective_product_id<'a>(&'a self, slot: &'a LookSlot) -> &'a ProductId {
        self.overrides
            .get(&slot.category)
            .unwrap_or(&slot.product_id)
    }
}
