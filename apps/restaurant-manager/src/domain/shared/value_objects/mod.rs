//! Value objects shared across bounded contexts.

mod identifiers;
mod money;

pub use identifiers::{MenuItemId, OrderId};
pub use money::Money;
