//! Persistence adapters.
//!
//! Implementations of `MenuRepository` and `OrderRepository`.

mod in_memory;
mod sqlite;

pub use in_memory::InMemoryStore;
pub use sqlite::{SCHEMA, SqliteStore};
