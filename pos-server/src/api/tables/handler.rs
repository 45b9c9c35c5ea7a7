//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{DiningTable, TableCreate, TableStatusUpdate, TableSummary};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/tables - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    Ok(Json(state.ledger.list_tables()))
}

/// GET /api/tables/summary - 各状态桌台数量
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<TableSummary>> {
    Ok(Json(state.ledger.table_summary()))
}

/// GET /api/tables/:id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DiningTable>> {
    Ok(Json(state.ledger.get_table(id)?))
}

/// POST /api/tables - 创建桌台
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TableCreate>,
) -> AppResult<Json<DiningTable>> {
    Ok(Json(state.ledger.add_table(
        payload.number,
        payload.capacity,
        &payload.section,
    )?))
}

/// PUT /api/tables/:id/status - 更新桌台状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TableStatusUpdate>,
) -> AppResult<Json<DiningTable>> {
    Ok(Json(state.ledger.update_table_status(id, payload.status)?))
}
