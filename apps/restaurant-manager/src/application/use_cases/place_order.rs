//! Place Order Use Case

use std::sync::Arc;

use crate::domain::menu::MenuRepository;
use crate::domain::ordering::{OrderDraft, OrderRepository, PricingError, price_selection};
use crate::domain::shared::{OrderId, StorageFault};

/// Result of a place-order attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOrderOutcome {
    /// The order was stored.
    Placed {
        /// Assigned id.
        order_id: OrderId,
        /// Stored items text and total.
        draft: OrderDraft,
    },
    /// Nothing was selected; storage was not touched.
    EmptySelection,
    /// The total cannot be stored; nothing was written.
    TotalTooLarge,
}

/// Use case for placing an order from a selection of menu item names.
pub struct PlaceOrderUseCase<M, O>
where
    M: MenuRepository,
    O: OrderRepository,
{
    menu_repo: Arc<M>,
    order_repo: Arc<O>,
}

impl<M, O> PlaceOrderUseCase<M, O>
where
    M: MenuRepository,
    O: OrderRepository,
{
    /// Create a new PlaceOrderUseCase.
    pub const fn new(menu_repo: Arc<M>, order_repo: Arc<O>) -> Self {
        Self {
            menu_repo,
            order_repo,
        }
    }

    /// Price the selection against the current menu and store the order.
    ///
    /// An empty selection returns [`PlaceOrderOutcome::EmptySelection`]
    /// without reading or writing storage.
    pub async fn execute(&self, selection: &[String]) -> Result<PlaceOrderOutcome, StorageFault> {
        if selection.is_empty() {
            tracing::warn!("Order rejected: empty selection");
            return Ok(PlaceOrderOutcome::EmptySelection);
        }

        let menu = self.menu_repo.list_menu().await?;
        let draft = match price_selection(&menu, selection) {
            Ok(draft) => draft,
            Err(PricingError::EmptySelection) => return Ok(PlaceOrderOutcome::EmptySelection),
            Err(PricingError::TotalTooLarge) => {
                tracing::warn!(items = selection.len(), "Order rejected: total too large");
                return Ok(PlaceOrderOutcome::TotalTooLarge);
            }
        };

        let order_id = self
            .order_repo
            .place_order(&draft.items, draft.total_price)
            .await?;

        tracing::info!(
            order_id = %order_id,
            items = %draft.items,
            total_price = %draft.total_price,
            "Order placed"
        );

        Ok(PlaceOrderOutcome::Placed { order_id, draft })
    }
}
