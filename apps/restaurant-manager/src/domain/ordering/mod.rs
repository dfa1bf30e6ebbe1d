//! Ordering Bounded Context
//!
//! Orders record the selected item names as one joined string and a total
//! priced once at placement. Status moves between `Pending` and
//! `Completed`; orders are never deleted.

mod order;
mod order_status;
pub mod repository;
pub mod services;

pub use order::Order;
pub use order_status::OrderStatus;
pub use repository::OrderRepository;
pub use services::{OrderDraft, PricingError, price_selection};
