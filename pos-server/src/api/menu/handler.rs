//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{MenuItem, MenuItemAvailability, MenuItemCreate, MenuItemUpdate, MenuSection};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/menu - 获取所有菜品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    Ok(Json(state.catalog.list_menu_items()))
}

/// GET /api/menu/digital - 数字菜单
pub async fn digital_menu(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuSection>>> {
    Ok(Json(state.catalog.digital_menu()))
}

/// GET /api/menu/:id - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(state.catalog.get_menu_item(id)?))
}

/// POST /api/menu - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(state.catalog.create_menu_item(payload)?))
}

/// PUT /api/menu/:id - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(state.catalog.update_menu_item(id, payload)?))
}

/// DELETE /api/menu/:id - 删除菜品
///
/// 历史订单保存的是菜品快照，不受影响。
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(state.catalog.delete_menu_item(id)?))
}

/// PUT /api/menu/:id/availability - 上下架
pub async fn set_availability(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuItemAvailability>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(
        state
            .catalog
            .set_menu_item_availability(id, payload.is_available)?,
    ))
}
