//! `atelier-cart` — the authoritative shopping-cart collection.
//!
//! The store owns merge/quantity/removal rules and derived totals; the
//! persistence adapter underneath it absorbs every storage failure so a
//! hostile or corrupted substrate can never crash the session.

pub mod item;
pub mod persistence;
pub mod store;

pub use item::CartItem;
pub use persistence::{CART_STORAGE_KEY, CartPersistence};
pub use store::{CartStore, MAX_QUANTITY};
