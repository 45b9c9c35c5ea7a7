//! Shared types for the restaurant POS
//!
//! Domain types used by the order ledger and by any caller of its API:
//! catalog models, order/kitchen/delivery state machines, ledger events,
//! and the unified error system.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
pub use order::{LedgerEvent, LedgerEventType, Order, OrderStatus};
