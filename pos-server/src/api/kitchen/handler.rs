//! Kitchen display API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::order::{KitchenItemStatusUpdate, KitchenTicket, KitchenTicketView};

use crate::core::ServerState;
use crate::orders::KitchenQuery;
use crate::utils::AppResult;

/// GET /api/kitchen-tickets?station=&include_completed= - 厨房工单 (紧急优先)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<KitchenQuery>,
) -> AppResult<Json<Vec<KitchenTicketView>>> {
    Ok(Json(state.ledger.list_kitchen_tickets(&query)))
}

/// GET /api/kitchen-tickets/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<KitchenTicketView>> {
    Ok(Json(state.ledger.get_kitchen_ticket(&id)?))
}

/// PUT /api/kitchen-tickets/:id/items/:item_id/status - 推进工单菜品
pub async fn update_item_status(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(String, String)>,
    Json(payload): Json<KitchenItemStatusUpdate>,
) -> AppResult<Json<KitchenTicket>> {
    Ok(Json(
        state
            .ledger
            .update_kitchen_item_status(&id, &item_id, payload.status)?,
    ))
}
