//! Menu item entity.

use serde::{Deserialize, Serialize};

use super::Availability;
use crate::domain::shared::{MenuItemId, Money};

/// The full field set written by add and update.
///
/// No field is validated here: empty names, duplicate names and any price
/// are accepted by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemDraft {
    /// Display name.
    pub name: String,
    /// Free-form category.
    pub category: String,
    /// Price per item.
    pub price: Money,
    /// Availability flag.
    pub available: Availability,
}

impl MenuItemDraft {
    /// Create a draft from its fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        available: Availability,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            available,
        }
    }

    /// Attach the id assigned by storage.
    #[must_use]
    pub fn into_item(self, id: MenuItemId) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            available: self.available,
        }
    }
}

/// A stored menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Row id, assigned by storage.
    pub id: MenuItemId,
    /// Display name.
    pub name: String,
    /// Free-form category.
    pub category: String,
    /// Price per item.
    pub price: Money,
    /// Availability flag.
    pub available: Availability,
}
