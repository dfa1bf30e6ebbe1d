//! Shared kernel used by every bounded context.

mod errors;
pub mod value_objects;

pub use errors::{DomainError, StorageFault};
pub use value_objects::{MenuItemId, Money, OrderId};
