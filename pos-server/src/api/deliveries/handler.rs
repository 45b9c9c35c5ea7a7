//! Delivery API Handlers
//!
//! `:id` is the order ID; a delivery has no identity of its own.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::order::{Courier, DeliveryStatus, DeliveryStatusUpdate, Order};

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Default, Deserialize)]
pub struct DeliveryQuery {
    pub status: Option<DeliveryStatus>,
}

/// GET /api/deliveries?status= - 外卖订单 (最新在前)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<DeliveryQuery>,
) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.ledger.list_deliveries(query.status)))
}

/// GET /api/deliveries/track/:code - 按追踪码查询
pub async fn track(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.ledger.find_by_tracking_code(&code)?))
}

/// PUT /api/deliveries/:id/status - 推进配送状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DeliveryStatusUpdate>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.ledger.update_delivery_status(&id, payload.status)?))
}

/// PUT /api/deliveries/:id/courier - 指派骑手
pub async fn assign_courier(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(courier): Json<Courier>,
) -> AppResult<Json<Order>> {
    Ok(Json(state.ledger.assign_courier(&id, courier)?))
}
