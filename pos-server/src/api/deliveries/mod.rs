//! Delivery API 模块 (外卖配送)

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/deliveries", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/track/{code}", get(handler::track))
        .route("/{id}/status", put(handler::update_status))
        .route("/{id}/courier", put(handler::assign_courier))
}
