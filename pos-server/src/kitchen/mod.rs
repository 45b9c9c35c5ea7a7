//! Kitchen ticket deriver
//!
//! Projects a freshly created order into the ticket shown on the kitchen
//! display. Item-level progress is tracked by the ledger.

pub mod deriver;

pub use deriver::{derive_ticket, is_beverage_category, needs_ticket, station_for_category};
