//! Manage Menu Use Case

use std::sync::Arc;

use crate::domain::menu::{MenuItem, MenuItemDraft, MenuRepository};
use crate::domain::shared::{MenuItemId, StorageFault};

/// Use case backing the Menu page: listing plus add, delete and update.
pub struct ManageMenuUseCase<M>
where
    M: MenuRepository,
{
    menu_repo: Arc<M>,
}

impl<M> ManageMenuUseCase<M>
where
    M: MenuRepository,
{
    /// Create a new ManageMenuUseCase.
    pub const fn new(menu_repo: Arc<M>) -> Self {
        Self { menu_repo }
    }

    /// All menu items in storage order.
    pub async fn list(&self) -> Result<Vec<MenuItem>, StorageFault> {
        self.menu_repo.list_menu().await
    }

    /// Add a menu item.
    pub async fn add(&self, draft: MenuItemDraft) -> Result<MenuItemId, StorageFault> {
        let name = draft.name.clone();
        let id = self.menu_repo.add_menu_item(draft).await?;
        tracing::info!(menu_item_id = %id, name = %name, "Menu item added");
        Ok(id)
    }

    /// Delete a menu item. An unknown id is not an error.
    pub async fn delete(&self, id: MenuItemId) -> Result<usize, StorageFault> {
        let rows = self.menu_repo.delete_menu_item(id).await?;
        if rows == 0 {
            tracing::debug!(menu_item_id = %id, "No menu item matched delete");
        } else {
            tracing::info!(menu_item_id = %id, "Menu item deleted");
        }
        Ok(rows)
    }

    /// Overwrite a menu item. An unknown id is not an error.
    pub async fn update(&self, id: MenuItemId, draft: MenuItemDraft) -> Result<usize, StorageFault> {
        let rows = self.menu_repo.update_menu_item(id, draft).await?;
        if rows == 0 {
            tracing::debug!(menu_item_id = %id, "No menu item matched update");
        } else {
            tracing::info!(menu_item_id = %id, "Menu item updated");
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::Availability;
    use crate::domain::shared::Money;
    use crate::infrastructure::persistence::InMemoryStore;
    use rust_decimal_macros::dec;

    fn draft(name: &str) -> MenuItemDraft {
        MenuItemDraft::new(name, "Food", Money::new(dec!(4)), Availability::Yes)
    }

    #[tokio::test]
    async fn add_then_list() {
        let use_case = ManageMenuUseCase::new(Arc::new(InMemoryStore::new()));

        let id = use_case.add(draft("Burger")).await.unwrap();
        let items = use_case.list().await.unwrap();

        assert_eq!(items, vec![draft("Burger").into_item(id)]);
    }

    #[tokio::test]
    async fn delete_reports_rows() {
        let use_case = ManageMenuUseCase::new(Arc::new(InMemoryStore::new()));
        let id = use_case.add(draft("Burger")).await.unwrap();

        assert_eq!(use_case.delete(id).await.unwrap(), 1);
        assert_eq!(use_case.delete(id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_unknown_id_is_noop() {
        let use_case = ManageMenuUseCase::new(Arc::new(InMemoryStore::new()));
        use_case.add(draft("Burger")).await.unwrap();

        let rows = use_case
            .update(MenuItemId::new(4999), draft("Pizza"))
            .await
            .unwrap();

        assert_eq!(rows, 0);
        let items = use_case.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Burger");
    }
}
