//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! Each use case call maps to one user interaction and performs at most one
//! write against storage.

pub mod use_cases;

pub use use_cases::*;
