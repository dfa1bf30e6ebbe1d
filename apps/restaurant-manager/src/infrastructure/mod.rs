//! Infrastructure Layer
//!
//! Adapters for the ports defined in the domain layer. Following hexagonal
//! architecture:
//!
//! - **Driven Adapters (Outbound)**
//!   - `persistence/`: SQLite store and an in-memory store for tests
//!
//! - **Driver Adapters (Inbound)**
//!   - `http/`: HTML pages and form handlers

pub mod http;
pub mod persistence;
