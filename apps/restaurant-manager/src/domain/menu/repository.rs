//! Menu Repository Trait
//!
//! Defines the persistence abstraction for the menu catalog.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::{MenuItem, MenuItemDraft};
use crate::domain::shared::{MenuItemId, StorageFault};

/// Repository trait for menu items.
///
/// Every method is one statement against storage. Mutations report the
/// number of rows they touched; zero is a normal outcome, not an error.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// List every menu item in storage order.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list_menu(&self) -> Result<Vec<MenuItem>, StorageFault>;

    /// Insert a new menu item and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns error if the insert fails.
    async fn add_menu_item(&self, draft: MenuItemDraft) -> Result<MenuItemId, StorageFault>;

    /// Delete the menu item with this id, if any.
    ///
    /// # Errors
    ///
    /// Returns error if the delete fails.
    async fn delete_menu_item(&self, id: MenuItemId) -> Result<usize, StorageFault>;

    /// Overwrite every field of the menu item with this id, if any.
    ///
    /// # Errors
    ///
    /// Returns error if the update fails.
    async fn update_menu_item(
        &self,
        id: MenuItemId,
        draft: MenuItemDraft,
    ) -> Result<usize, StorageFault>;
}
