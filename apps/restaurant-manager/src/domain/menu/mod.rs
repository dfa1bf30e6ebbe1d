//! Menu Catalog Bounded Context
//!
//! Menu items with a name, a free-form category, a price and an
//! availability flag. Items are looked up by row id; names are not unique.

mod availability;
mod menu_item;
pub mod repository;

pub use availability::Availability;
pub use menu_item::{MenuItem, MenuItemDraft};
pub use repository::MenuRepository;
