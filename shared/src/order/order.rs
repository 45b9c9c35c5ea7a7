//! Order aggregate

use serde::{Deserialize, Serialize};

use super::delivery::DeliveryDetails;
use super::status::{LineItemStatus, OrderStatus};
use super::types::{OrderLineItem, OrderTotals, OrderType, PaymentRecord};

/// Order - the ledger's aggregate root
///
/// Line items are fixed after creation; only status, payment and delivery
/// tracking change afterwards. Money fields are stored rounded to 2 dp and
/// always satisfy `total = max(0, subtotal - discount + tax + tip)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_type: OrderType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<i64>,
    /// Table number snapshot (for tickets, history and exports)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    pub items: Vec<OrderLineItem>,
    pub status: OrderStatus,
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub tip: f64,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliveryDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentRecord>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Order {
    pub fn totals(&self) -> OrderTotals {
        OrderTotals {
            subtotal: self.subtotal,
            discount: self.discount,
            tax: self.tax,
            tip: self.tip,
            total: self.total,
        }
    }

    pub fn apply_totals(&mut self, totals: OrderTotals) {
        self.subtotal = totals.subtotal;
        self.discount = totals.discount;
        self.tax = totals.tax;
        self.tip = totals.tip;
        self.total = totals.total;
    }

    /// Delivery fee (0 for non-delivery orders)
    pub fn delivery_fee(&self) -> f64 {
        self.delivery.as_ref().map_or(0.0, |d| d.fee)
    }

    /// Total item count (Σ quantity)
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn is_delivery(&self) -> bool {
        self.delivery.is_some()
    }
}

/// Order status change payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

/// Line item status change payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LineItemStatusUpdate {
    pub status: LineItemStatus,
}
