//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Customer, CustomerCreate};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/customers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Customer>>> {
    Ok(Json(state.catalog.list_customers()))
}

/// GET /api/customers/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Customer>> {
    Ok(Json(state.catalog.get_customer(id)?))
}

/// POST /api/customers - 新增顾客
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<Json<Customer>> {
    Ok(Json(state.catalog.add_customer(payload)?))
}
