//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Entities**: Menu items and orders as stored rows
//! - **Value Objects**: Identifiers, money, availability and status
//! - **Domain Services**: Stateless business logic (order pricing)
//! - **Repository Traits**: Persistence abstractions (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`menu`]: The menu catalog
//! - [`ordering`]: Order placement and status tracking

pub mod menu;
pub mod ordering;
pub mod shared;
