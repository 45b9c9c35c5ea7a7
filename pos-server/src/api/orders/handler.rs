//! Orders API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::order::{
    Discount, LineItemStatusUpdate, Order, OrderDraft, OrderStatusUpdate, PaymentInput, Quote,
};

use crate::core::ServerState;
use crate::orders::OrderFilter;
use crate::utils::AppResult;

/// Cashier preview request
#[derive(Debug, Default, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub tip: Option<f64>,
    #[serde(default)]
    pub split_count: Option<u32>,
}

/// GET /api/orders - 订单列表 (最新在前)
///
/// Query: `status`, `order_type`, `table_id`, `from`/`to` (Unix millis), `search`
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<OrderFilter>,
) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.ledger.list_orders(&filter)))
}

/// GET /api/orders/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.ledger.get_order(&id)?))
}

/// POST /api/orders - 下单
pub async fn create(
    State(state): State<ServerState>,
    Json(draft): Json<OrderDraft>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.ledger.create_order(draft)?))
}

/// PUT /api/orders/:id/status - 推进订单状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.ledger.update_order_status(&id, payload.status)?))
}

/// PUT /api/orders/:id/items/:item_id/status - 推进单个菜品状态
pub async fn update_item_status(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(String, String)>,
    Json(payload): Json<LineItemStatusUpdate>,
) -> AppResult<Json<Order>> {
    Ok(Json(
        state
            .ledger
            .update_line_item_status(&id, &item_id, payload.status)?,
    ))
}

/// POST /api/orders/:id/quote - 结账预览 (不修改订单)
pub async fn quote(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<QuoteRequest>,
) -> AppResult<Json<Quote>> {
    Ok(Json(state.ledger.quote(
        &id,
        payload.discount,
        payload.tip,
        payload.split_count,
    )?))
}

/// POST /api/orders/:id/payment - 结账
///
/// 经支付网关处理；网关失败时订单保持未支付。
pub async fn pay(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<PaymentInput>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.cashier.checkout(&id, input).await?))
}
