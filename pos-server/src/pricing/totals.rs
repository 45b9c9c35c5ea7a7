//! Order totals
//!
//! ```text
//! subtotal = Σ quantity × unit_price
//! discount = percentage ? subtotal × value / 100 : value     clamped to [0, subtotal]
//! tax      = (subtotal - discount) × tax_rate
//! total    = max(0, subtotal - discount + tax + tip)           tip is never taxed
//! ```
//!
//! Each component is rounded to 2 dp before the total is summed, so the
//! stored fields add up exactly.

use rust_decimal::prelude::*;
use shared::order::{Discount, DiscountKind, OrderLineItem, OrderTotals};

use super::money::{round_money, to_decimal, to_f64};

/// Anything with a quantity and a unit price
pub trait PricedLine {
    fn quantity(&self) -> u32;
    fn unit_price(&self) -> f64;
}

impl PricedLine for OrderLineItem {
    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn unit_price(&self) -> f64 {
        self.unit_price
    }
}

/// `(quantity, unit_price)`
impl PricedLine for (u32, f64) {
    fn quantity(&self) -> u32 {
        self.0
    }

    fn unit_price(&self) -> f64 {
        self.1
    }
}

/// 10 → 0.10
pub fn tax_rate_from_percent(percent: f64) -> Decimal {
    to_decimal(percent) / Decimal::ONE_HUNDRED
}

pub fn compute_totals<L: PricedLine>(
    lines: &[L],
    discount: Option<Discount>,
    tax_rate: Decimal,
    tip: f64,
) -> OrderTotals {
    let subtotal = round_money(
        lines
            .iter()
            .map(|l| Decimal::from(l.quantity()) * to_decimal(l.unit_price()))
            .sum::<Decimal>(),
    );

    let discount_amount = match discount {
        Some(d) => {
            let raw = match d.kind {
                DiscountKind::Percentage => subtotal * to_decimal(d.value) / Decimal::ONE_HUNDRED,
                DiscountKind::Fixed => to_decimal(d.value),
            };
            round_money(raw.clamp(Decimal::ZERO, subtotal))
        }
        None => Decimal::ZERO,
    };

    let tax = round_money((subtotal - discount_amount) * tax_rate);
    let tip = round_money(to_decimal(tip).max(Decimal::ZERO));
    let total = (subtotal - discount_amount + tax + tip).max(Decimal::ZERO);

    OrderTotals {
        subtotal: to_f64(subtotal),
        discount: to_f64(discount_amount),
        tax: to_f64(tax),
        tip: to_f64(tip),
        total: to_f64(total),
    }
}

/// Per-person share, rounded to 2 dp. The rounding remainder is not
/// redistributed (100.00 / 3 → 33.33 each).
pub fn split_bill(amount: f64, split_count: u32) -> f64 {
    let count = Decimal::from(split_count.max(1));
    to_f64(to_decimal(amount) / count)
}
