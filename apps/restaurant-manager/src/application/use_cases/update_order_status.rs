//! Update Order Status Use Case

use std::sync::Arc;

use crate::domain::ordering::{Order, OrderRepository, OrderStatus};
use crate::domain::shared::{OrderId, StorageFault};

/// Use case backing the Order Status page.
pub struct UpdateOrderStatusUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> UpdateOrderStatusUseCase<O>
where
    O: OrderRepository,
{
    /// Create a new UpdateOrderStatusUseCase.
    pub const fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    /// Overwrite the status of an order. An unknown id is not an error.
    pub async fn execute(&self, id: OrderId, status: &OrderStatus) -> Result<usize, StorageFault> {
        let rows = self.order_repo.update_order_status(id, status).await?;
        if rows == 0 {
            tracing::debug!(order_id = %id, status = %status, "No order matched status update");
        } else {
            tracing::info!(order_id = %id, status = %status, "Order status updated");
        }
        Ok(rows)
    }

    /// All orders in storage order.
    pub async fn list_orders(&self) -> Result<Vec<Order>, StorageFault> {
        self.order_repo.list_orders().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Money;
    use crate::infrastructure::persistence::InMemoryStore;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn completes_existing_order() {
        let store = Arc::new(InMemoryStore::new());
        let id = store
            .place_order("Burger", Money::new(dec!(5)))
            .await
            .unwrap();
        let use_case = UpdateOrderStatusUseCase::new(Arc::clone(&store));

        assert_eq!(use_case.execute(id, &OrderStatus::Completed).await.unwrap(), 1);

        let orders = use_case.list_orders().await.unwrap();
        assert_eq!(orders[0].status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn unknown_id_creates_nothing() {
        let store = Arc::new(InMemoryStore::new());
        let use_case = UpdateOrderStatusUseCase::new(Arc::clone(&store));

        let rows = use_case
            .execute(OrderId::new(9), &OrderStatus::Completed)
            .await
            .unwrap();

        assert_eq!(rows, 0);
        assert!(use_case.list_orders().await.unwrap().is_empty());
    }
}
