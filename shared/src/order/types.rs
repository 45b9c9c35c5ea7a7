//! Order input and value types

use serde::{Deserialize, Serialize};

use super::delivery::DeliveryInput;
use super::status::LineItemStatus;
use crate::models::MenuItem;

// ============================================================================
// Order Type
// ============================================================================

/// 服务类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    /// 堂食
    #[default]
    DineIn,
    /// 打包
    Takeaway,
    /// 外卖
    Delivery,
}

impl OrderType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DineIn => "dine-in",
            Self::Takeaway => "takeaway",
            Self::Delivery => "delivery",
        }
    }
}

// ============================================================================
// Line Items
// ============================================================================

/// Line item as submitted by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemInput {
    pub menu_item_id: i64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub modifications: Vec<String>,
}

/// Line item stored on an order
///
/// The menu item is embedded by value and `unit_price` is captured at
/// creation time, so catalog edits never reach historical orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Line item ID (unique within the ledger)
    pub id: String,
    pub menu_item: MenuItem,
    pub quantity: u32,
    pub unit_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub modifications: Vec<String>,
    pub status: LineItemStatus,
}

// ============================================================================
// Discount
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    /// value is 0-100 percent of the subtotal
    #[default]
    Percentage,
    /// value is a currency amount
    Fixed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Discount {
    pub value: f64,
    #[serde(default)]
    pub kind: DiscountKind,
}

impl Discount {
    pub fn percentage(value: f64) -> Self {
        Self {
            value,
            kind: DiscountKind::Percentage,
        }
    }

    pub fn fixed(value: f64) -> Self {
        Self {
            value,
            kind: DiscountKind::Fixed,
        }
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Order draft submitted to the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub order_type: OrderType,
    /// Required for dine-in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    pub items: Vec<LineItemInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<f64>,
    /// Required for delivery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliveryInput>,
}

// ============================================================================
// Totals
// ============================================================================

/// Derived money fields of an order (2 dp)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub tip: f64,
    pub total: f64,
}

/// Cashier preview of what an order would cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub totals: OrderTotals,
    /// total plus delivery fee
    pub amount_due: f64,
    pub split_count: u32,
    /// amount_due / split_count, rounded to 2 dp (remainder not redistributed)
    pub per_person: f64,
}

// ============================================================================
// Payment
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Credit,
    Debit,
    Pix,
    Voucher,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        Self::Cash,
        Self::Credit,
        Self::Debit,
        Self::Pix,
        Self::Voucher,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Credit => "credit",
            Self::Debit => "debit",
            Self::Pix => "pix",
            Self::Voucher => "voucher",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cash => "Dinheiro",
            Self::Credit => "Cartão de Crédito",
            Self::Debit => "Cartão de Débito",
            Self::Pix => "PIX",
            Self::Voucher => "Vale Refeição",
        }
    }
}

/// Payment request from the cashier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInput {
    pub method: PaymentMethod,
    /// Amount tendered
    pub amount: f64,
    /// Overrides the order's discount at payment time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    /// Overrides the order's tip at payment time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<f64>,
    /// Number of payers (display only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_count: Option<u32>,
}

/// Payment recorded on a paid order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub payment_id: String,
    pub method: PaymentMethod,
    /// Amount charged (amount due)
    pub amount: f64,
    /// Amount tendered
    pub tendered: f64,
    /// tendered - amount
    pub change: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub timestamp: i64,
}
