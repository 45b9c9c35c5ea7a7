//! Catalog - menu, inventory and customers
//!
//! Read-mostly reference data. Orders copy menu items by value at creation,
//! so nothing here can change a historical order.

mod error;
pub mod seed;
mod service;

pub use error::{CatalogError, CatalogResult};
pub use service::CatalogService;
