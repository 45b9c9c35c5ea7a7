//! Order list filter (订单筛选)

use serde::Deserialize;
use shared::order::{Order, OrderStatus, OrderType};

/// Query for `list_orders`
///
/// `from`/`to` are Unix millis, inclusive on `from`, exclusive on `to`.
/// `search` matches the order ID (case-insensitive) or the table number.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub order_type: Option<OrderType>,
    pub table_id: Option<i64>,
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub search: Option<String>,
}

impl OrderFilter {
    pub fn with_status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        if self.status.is_some_and(|s| s != order.status) {
            return false;
        }
        if self.order_type.is_some_and(|t| t != order.order_type) {
            return false;
        }
        if self.table_id.is_some() && self.table_id != order.table_id {
            return false;
        }
        if self.from.is_some_and(|from| order.created_at < from) {
            return false;
        }
        if self.to.is_some_and(|to| order.created_at >= to) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                order.id.to_lowercase().contains(&term)
                    || order
                        .table_number
                        .is_some_and(|n| n.to_string() == term)
            }
        }
    }
}
