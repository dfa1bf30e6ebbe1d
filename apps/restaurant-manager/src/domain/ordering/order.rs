//! Placed order entity.

use serde::{Deserialize, Serialize};

use super::OrderStatus;
use crate::domain::shared::{Money, OrderId};

/// A stored order.
///
/// `items` is the selection joined with `", "`. It references menu items by
/// name only, so it survives deletion or renaming of those items unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Row id, assigned by storage.
    pub id: OrderId,
    /// Joined item names.
    pub items: String,
    /// Total priced at placement.
    pub total_price: Money,
    /// Lifecycle marker.
    pub status: OrderStatus,
}
