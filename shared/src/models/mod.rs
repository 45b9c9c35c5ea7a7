//! Data models
//!
//! Catalog and floor reference data shared between the pos-server and its
//! callers (via API). All IDs are `i64` snowflakes (see [`crate::util::snowflake_id`]).

pub mod customer;
pub mod dining_table;
pub mod inventory;
pub mod menu_item;

// Re-exports
pub use customer::*;
pub use dining_table::*;
pub use inventory::*;
pub use menu_item::*;
