//! Reports API Handlers

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use http::header;
use serde::{Deserialize, Serialize};
use shared::order::{Order, OrderStatus, OrderType};
use shared::util::now_millis;

use crate::core::ServerState;
use crate::orders::OrderFilter;
use crate::reports::{
    DashboardSummary, HistoryStats, ReportRange, SalesReport, dashboard_summary,
    export_history_csv, history_stats, sales_report,
};
use crate::utils::AppResult;
use crate::utils::time::{date_range_millis, local_date};

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct SalesQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub status: Option<OrderStatus>,
    pub order_type: Option<OrderType>,
    pub search: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub stats: HistoryStats,
    pub orders: Vec<Order>,
}

/// 日期参数 → 订单筛选 (业务时区)
fn history_filter(state: &ServerState, query: HistoryQuery) -> AppResult<OrderFilter> {
    let (from, to) = date_range_millis(query.from.as_deref(), query.to.as_deref(), state.tz)?;
    Ok(OrderFilter {
        status: query.status,
        order_type: query.order_type,
        table_id: None,
        from,
        to,
        search: query.search,
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/reports/sales - 销售报表
pub async fn sales(
    State(state): State<ServerState>,
    Query(query): Query<SalesQuery>,
) -> AppResult<Json<SalesReport>> {
    let (start, end) = date_range_millis(query.from.as_deref(), query.to.as_deref(), state.tz)?;
    let orders = state.ledger.all_orders();
    Ok(Json(sales_report(&orders, ReportRange::new(start, end), state.tz)))
}

/// GET /api/reports/history - 历史订单 (最新在前) + 统计
pub async fn history(
    State(state): State<ServerState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<Json<HistoryResponse>> {
    let filter = history_filter(&state, query)?;
    let orders = state.ledger.list_orders(&filter);
    Ok(Json(HistoryResponse {
        stats: history_stats(&orders),
        orders,
    }))
}

/// GET /api/reports/history.csv - 导出历史订单
pub async fn history_csv(
    State(state): State<ServerState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<impl IntoResponse> {
    let filter = history_filter(&state, query)?;
    let orders = state.ledger.list_orders(&filter);
    let csv = export_history_csv(&orders, state.tz);

    let filename = format!(
        "attachment; filename=\"historico-pedidos-{}.csv\"",
        local_date(now_millis(), state.tz).format("%Y-%m-%d")
    );
    tracing::info!(rows = orders.len(), "History exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, filename),
        ],
        csv,
    ))
}

/// GET /api/reports/dashboard - 首页概览
pub async fn dashboard(State(state): State<ServerState>) -> AppResult<Json<DashboardSummary>> {
    let orders = state.ledger.all_orders();
    Ok(Json(dashboard_summary(
        &orders,
        &state.ledger.table_summary(),
        state.ledger.pending_ticket_count(),
        &state.catalog.inventory_summary(),
        now_millis(),
        state.tz,
    )))
}
