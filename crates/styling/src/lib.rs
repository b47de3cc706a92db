//! `atelier-styling` — "complete the look" bundle logic.
//!
//! Pricing and size recommendation are pure functions over resolved catalog
//! values; the look session is the only stateful piece, and it is ephemeral.

pub mod pricing;
pub mod session;
pub mod sizing;

pub use pricing::{PricingResult, price_bundle};
pub use session::LookSession;
pub use sizing::recommend_sizes;
