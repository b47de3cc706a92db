//! `atelier-storefront` — the composition root of the cart core.
//!
//! A constructed service object (no module-level singletons) owning the
//! cart store, the customization session, and a catalog handle. Everything
//! the UI layer may call lives on [`StorefrontService`]; nothing outside
//! this crate mutates cart or customization state directly.

pub mod checkout;
pub mod service;

pub use checkout::{LookCheckoutOutcome, SlotOutcome, SlotReport};
pub use service::StorefrontService;
