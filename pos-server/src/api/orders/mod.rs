//! Orders API 模块 (订单 + 结账)

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", put(handler::update_status))
        .route("/{id}/quote", post(handler::quote))
        .route("/{id}/payment", post(handler::pay))
        .route("/{id}/items/{item_id}/status", put(handler::update_item_status))
}
