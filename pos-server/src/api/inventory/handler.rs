//! Inventory API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{
    InventoryItem, InventoryItemCreate, InventoryItemUpdate, InventorySummary, StockAdjustment,
};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/inventory - 获取所有库存项
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<InventoryItem>>> {
    Ok(Json(state.catalog.list_inventory_items()))
}

/// GET /api/inventory/summary - 库存概览 (低库存、缺货、总价值)
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<InventorySummary>> {
    Ok(Json(state.catalog.inventory_summary()))
}

/// GET /api/inventory/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<InventoryItem>> {
    Ok(Json(state.catalog.get_inventory_item(id)?))
}

/// POST /api/inventory - 创建库存项
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InventoryItemCreate>,
) -> AppResult<Json<InventoryItem>> {
    Ok(Json(state.catalog.create_inventory_item(payload)?))
}

/// PUT /api/inventory/:id - 更新库存项
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<InventoryItemUpdate>,
) -> AppResult<Json<InventoryItem>> {
    Ok(Json(state.catalog.update_inventory_item(id, payload)?))
}

/// DELETE /api/inventory/:id - 删除库存项
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<InventoryItem>> {
    Ok(Json(state.catalog.delete_inventory_item(id)?))
}

/// POST /api/inventory/:id/adjust - 入库 / 出库
pub async fn adjust(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StockAdjustment>,
) -> AppResult<Json<InventoryItem>> {
    Ok(Json(state.catalog.adjust_stock(id, payload.delta)?))
}
