//! HTTP adapter.
//!
//! Inbound adapter serving the four HTML pages and their form posts.

mod controller;
mod pages;
mod request;

pub use controller::{AppState, create_router};
pub use pages::{Notice, Page, SiteInfo, View, render};
pub use request::*;
