//! Reports (报表)
//!
//! Read-only aggregations over ledger snapshots. Every function here takes
//! the orders it reports on, so handlers decide the scope (date range,
//! filters) and the numbers stay reproducible in tests.

mod dashboard;
mod history;
mod sales;

pub use dashboard::{DashboardSummary, dashboard_summary};
pub use history::{HISTORY_CSV_HEADER, HistoryStats, export_history_csv, history_stats};
pub use sales::{
    CategorySales, DailySales, HourlySales, ItemSales, PaymentMethodSales, ReportRange,
    SalesReport, TOP_ITEMS_LIMIT, sales_report,
};
