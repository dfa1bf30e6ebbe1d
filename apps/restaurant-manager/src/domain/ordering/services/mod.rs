//! Ordering domain services.

mod order_pricing;

pub use order_pricing::{OrderDraft, PricingError, price_selection};
