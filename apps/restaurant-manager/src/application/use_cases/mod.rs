//! Application use cases.

mod manage_menu;
mod place_order;
mod update_order_status;

pub use manage_menu::ManageMenuUseCase;
pub use place_order::{PlaceOrderOutcome, PlaceOrderUseCase};
pub use update_order_status::UpdateOrderStatusUseCase;
