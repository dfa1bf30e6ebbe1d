// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::items_after_statements
    )
)]

//! Restaurant Manager
//!
//! Menu catalog, order log and order-status updates for a single restaurant,
//! stored in one SQLite file and served as HTML form pages.
//!
//! # Architecture
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: menu items, orders, money and the order pricing rule
//!   - `menu`: `MenuItem`, `Availability`, `MenuRepository`
//!   - `ordering`: `Order`, `OrderStatus`, `OrderRepository`, `price_selection`
//!
//! - **Application**: one use case per page action
//!   - `ManageMenu`, `PlaceOrder`, `UpdateOrderStatus`
//!
//! - **Infrastructure**: adapters
//!   - `persistence`: SQLite store and an in-memory store for tests
//!   - `http`: axum router, form parsing and page rendering

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases.
pub mod application;

/// Infrastructure layer - Storage and HTTP adapters.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Logging setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use domain::menu::{Availability, MenuItem, MenuItemDraft, MenuRepository};
pub use domain::ordering::{
    Order, OrderDraft, OrderRepository, OrderStatus, PricingError, price_selection,
};
pub use domain::shared::{DomainError, MenuItemId, Money, OrderId, StorageFault};

pub use application::use_cases::{
    ManageMenuUseCase, PlaceOrderOutcome, PlaceOrderUseCase, UpdateOrderStatusUseCase,
};

pub use infrastructure::http::{AppState, SiteInfo, create_router};
pub use infrastructure::persistence::{InMemoryStore, SqliteStore};
