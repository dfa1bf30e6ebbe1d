//! In-memory store for testing.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::menu::{MenuItem, MenuItemDraft, MenuRepository};
use crate::domain::ordering::{Order, OrderRepository, OrderStatus};
use crate::domain::shared::{MenuItemId, Money, OrderId, StorageFault};

#[derive(Debug, Default)]
struct Tables {
    menu: Vec<MenuItem>,
    orders: Vec<Order>,
    last_menu_id: i64,
    last_order_id: i64,
}

/// In-memory implementation of both repositories.
///
/// Mirrors the SQLite semantics: ids autoincrement and are never reused,
/// rows keep insertion order, and unknown ids are silent no-ops.
/// Suitable for testing and development. Not for production use.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, StorageFault> {
        self.tables
            .lock()
            .map_err(|_| StorageFault::Worker("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl MenuRepository for InMemoryStore {
    async fn list_menu(&self) -> Result<Vec<MenuItem>, StorageFault> {
        Ok(self.tables()?.menu.clone())
    }

    async fn add_menu_item(&self, draft: MenuItemDraft) -> Result<MenuItemId, StorageFault> {
        let mut tables = self.tables()?;
        tables.last_menu_id += 1;
        let id = MenuItemId::new(tables.last_menu_id);
        tables.menu.push(draft.into_item(id));
        Ok(id)
    }

    async fn delete_menu_item(&self, id: MenuItemId) -> Result<usize, StorageFault> {
        let mut tables = self.tables()?;
        let before = tables.menu.len();
        tables.menu.retain(|item| item.id != id);
        Ok(before - tables.menu.len())
    }

    async fn update_menu_item(
        &self,
        id: MenuItemId,
        draft: MenuItemDraft,
    ) -> Result<usize, StorageFault> {
        let mut tables = self.tables()?;
        Ok(tables
            .menu
            .iter_mut()
            .find(|item| item.id == id)
            .map_or(0, |item| {
                *item = draft.into_item(id);
                1
            }))
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn place_order(&self, items: &str, total_price: Money) -> Result<OrderId, StorageFault> {
        let mut tables = self.tables()?;
        tables.last_order_id += 1;
        let id = OrderId::new(tables.last_order_id);
        tables.orders.push(Order {
            id,
            items: items.to_string(),
            total_price,
            status: OrderStatus::Pending,
        });
        Ok(id)
    }

    async fn update_order_status(
        &self,
        id: OrderId,
        status: &OrderStatus,
    ) -> Result<usize, StorageFault> {
        let mut tables = self.tables()?;
        Ok(tables
            .orders
            .iter_mut()
            .find(|order| order.id == id)
            .map_or(0, |order| {
                order.status = status.clone();
                1
            }))
    }

    async fn list_orders(&self) -> Result<Vec<Order>, StorageFault> {
        Ok(self.tables()?.orders.clone())
    }

    async fn find_order(&self, id: OrderId) -> Result<Option<Order>, StorageFault> {
        Ok(self
            .tables()?
            .orders
            .iter()
            .find(|order| order.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::Availability;
    use rust_decimal_macros::dec;

    fn draft(name: &str) -> MenuItemDraft {
        MenuItemDraft::new(name, "Food", Money::new(dec!(3)), Availability::Yes)
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let store = InMemoryStore::new();
        let first = store.add_menu_item(draft("A")).await.unwrap();
        store.delete_menu_item(first).await.unwrap();
        let second = store.add_menu_item(draft("B")).await.unwrap();

        assert_eq!(first, MenuItemId::new(1));
        assert_eq!(second, MenuItemId::new(2));
    }

    #[tokio::test]
    async fn update_replaces_in_place() {
        let store = InMemoryStore::new();
        let a = store.add_menu_item(draft("A")).await.unwrap();
        let b = store.add_menu_item(draft("B")).await.unwrap();

        assert_eq!(store.update_menu_item(a, draft("C")).await.unwrap(), 1);

        let names: Vec<String> = store
            .list_menu()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["C", "B"]);
        assert_eq!(store.update_menu_item(MenuItemId::new(b.value() + 5), draft("D")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn find_order_missing_is_none() {
        let store = InMemoryStore::new();
        assert!(store.find_order(OrderId::new(1)).await.unwrap().is_none());
    }
}
