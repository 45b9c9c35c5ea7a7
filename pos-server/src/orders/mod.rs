//! Orders Module - the restaurant order ledger
//!
//! - [`OrderLedger`]: owns orders, kitchen tickets, tables and the event log
//! - [`LedgerError`]: typed failures; none of them leaves partial state behind
//! - [`OrderFilter`]: list query

mod error;
mod filter;
pub mod ledger;
pub mod validation;

pub use error::{LedgerError, LedgerResult, Machine, Resource, ValidationError};
pub use filter::OrderFilter;
pub use ledger::{KitchenQuery, LedgerSettings, OrderLedger, PaymentReservation};
