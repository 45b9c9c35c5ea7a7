//! Order history (历史订单): statistics and CSV export

use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::order::{Order, OrderStatus, StatusDisplay};

use crate::pricing::{to_decimal, to_f64};
use crate::utils::time::to_local;

pub const HISTORY_CSV_HEADER: &str = "ID,Date,Table,Type,Status,Items,Total";

/// Statistics over an already-filtered history list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total_orders: usize,
    /// Σ total over every listed order, cancelled ones included
    pub revenue: f64,
    pub average_ticket: f64,
    /// Paid orders
    pub completed: usize,
    pub cancelled: usize,
    /// Percent, 1 dp
    pub completion_rate: f64,
    /// Percent, 1 dp
    pub cancellation_rate: f64,
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let value = Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole);
    to_f64(value.round_dp(1))
}

pub fn history_stats(orders: &[Order]) -> HistoryStats {
    let total_orders = orders.len();
    if total_orders == 0 {
        return HistoryStats::default();
    }

    let revenue: Decimal = orders.iter().map(|o| to_decimal(o.total)).sum();
    let completed = orders.iter().filter(|o| o.status == OrderStatus::Paid).count();
    let cancelled = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Cancelled)
        .count();

    HistoryStats {
        total_orders,
        revenue: to_f64(revenue),
        average_ticket: to_f64(revenue / Decimal::from(total_orders)),
        completed,
        cancelled,
        completion_rate: percent(completed, total_orders),
        cancellation_rate: percent(cancelled, total_orders),
    }
}

/// CSV export, one row per order in the given order
///
/// Dates are local to `tz` (`dd/mm/yyyy HH:MM`); orders without a table
/// show `N/A`; the status column carries the display label.
pub fn export_history_csv(orders: &[Order], tz: Tz) -> String {
    let mut lines = Vec::with_capacity(orders.len() + 1);
    lines.push(HISTORY_CSV_HEADER.to_string());

    for order in orders {
        let table = order
            .table_number
            .map_or_else(|| "N/A".to_string(), |n| n.to_string());
        lines.push(
            [
                order.id.clone(),
                to_local(order.created_at, tz)
                    .format("%d/%m/%Y %H:%M")
                    .to_string(),
                table,
                order.order_type.as_str().to_string(),
                order.status.label().to_string(),
                order.items.len().to_string(),
                format!("{:.2}", order.total),
            ]
            .join(","),
        );
    }

    lines.join("\n")
}
