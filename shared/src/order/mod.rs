//! Order ledger domain types
//!
//! - Orders and their line items, drafts, totals and payments
//! - Status state machines with their display metadata
//! - Kitchen tickets and delivery tracking
//! - Ledger events: immutable facts recorded after each mutation

pub mod delivery;
pub mod event;
pub mod kitchen;
pub mod order;
pub mod status;
pub mod types;

// Re-exports
pub use delivery::*;
pub use event::{EventPayload, LedgerEvent, LedgerEventType};
pub use kitchen::*;
pub use order::{LineItemStatusUpdate, Order, OrderStatusUpdate};
pub use status::*;
pub use types::*;
