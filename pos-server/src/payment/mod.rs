//! Payment collaborator
//!
//! - [`PaymentGateway`]: external processor seam (card / pix acquirer)
//! - [`SimulatedGateway`]: in-process stand-in with a configurable delay
//! - [`Cashier`]: checkout flow tying the gateway to the ledger

mod cashier;
mod gateway;

pub use cashier::Cashier;
pub use gateway::{GatewayError, PaymentGateway, PaymentReceipt, PaymentRequest, SimulatedGateway};
