//! Order Repository Trait
//!
//! Defines the persistence abstraction for orders.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::{Order, OrderStatus};
use crate::domain::shared::{Money, OrderId, StorageFault};

/// Repository trait for orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order with status `Pending` and return its id.
    ///
    /// `items` and `total_price` are stored as given; pricing happens before
    /// this call.
    ///
    /// # Errors
    ///
    /// Returns error if the insert fails.
    async fn place_order(&self, items: &str, total_price: Money) -> Result<OrderId, StorageFault>;

    /// Overwrite the status of the order with this id, if any.
    ///
    /// The status text is written as-is, including unrecognized values.
    ///
    /// # Errors
    ///
    /// Returns error if the update fails.
    async fn update_order_status(
        &self,
        id: OrderId,
        status: &OrderStatus,
    ) -> Result<usize, StorageFault>;

    /// List every order in storage order.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list_orders(&self) -> Result<Vec<Order>, StorageFault>;

    /// Find an order by id.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_order(&self, id: OrderId) -> Result<Option<Order>, StorageFault>;
}
