//! Dashboard counters (首页概览)

use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{InventorySummary, TableSummary};
use shared::order::{Order, OrderStatus};

use crate::pricing::{to_decimal, to_f64};
use crate::utils::time::today_range;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Σ total of today's non-cancelled orders (business time zone)
    pub today_sales: f64,
    pub today_orders: usize,
    pub average_ticket: f64,
    /// Orders neither paid nor cancelled, any day
    pub active_orders: usize,
    pub occupied_tables: usize,
    pub total_tables: usize,
    pub pending_kitchen_tickets: usize,
    pub low_stock_items: usize,
}

pub fn dashboard_summary(
    orders: &[Order],
    tables: &TableSummary,
    pending_kitchen_tickets: usize,
    inventory: &InventorySummary,
    now: i64,
    tz: Tz,
) -> DashboardSummary {
    let (start, end) = today_range(now, tz);

    let mut today_sales = Decimal::ZERO;
    let mut today_orders = 0;
    for order in orders {
        if order.status != OrderStatus::Cancelled && order.created_at >= start && order.created_at < end {
            today_sales += to_decimal(order.total);
            today_orders += 1;
        }
    }

    let average_ticket = if today_orders > 0 {
        to_f64(today_sales / Decimal::from(today_orders))
    } else {
        0.0
    };

    DashboardSummary {
        today_sales: to_f64(today_sales),
        today_orders,
        average_ticket,
        active_orders: orders.iter().filter(|o| o.status.is_active()).count(),
        occupied_tables: tables.occupied,
        total_tables: tables.total,
        pending_kitchen_tickets,
        low_stock_items: inventory.low_stock,
    }
}
