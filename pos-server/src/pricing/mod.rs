//! Pricing & totals engine
//!
//! Pure functions: no clock, no state. Identical inputs always give
//! identical receipts.

pub mod money;
pub mod totals;

pub use money::{MONEY_TOLERANCE, is_payment_sufficient, to_decimal, to_f64};
pub use totals::{PricedLine, compute_totals, split_bill, tax_rate_from_percent};
