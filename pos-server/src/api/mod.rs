//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`menu`] - 菜单管理接口
//! - [`inventory`] - 库存管理接口
//! - [`customers`] - 顾客接口
//! - [`orders`] - 订单、结账接口
//! - [`events`] - 账本事件日志
//! - [`kitchen`] - 厨房显示接口
//! - [`tables`] - 桌台管理接口
//! - [`deliveries`] - 外卖配送接口
//! - [`reports`] - 报表、历史、首页概览

pub mod customers;
pub mod deliveries;
pub mod events;
pub mod health;
pub mod inventory;
pub mod kitchen;
pub mod menu;
pub mod orders;
pub mod reports;
pub mod tables;

use axum::Router;
use http::{HeaderName, HeaderValue, StatusCode};
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub use crate::utils::{AppError, AppResult};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(menu::router())
        .merge(inventory::router())
        .merge(customers::router())
        .merge(orders::router())
        .merge(events::router())
        .merge(kitchen::router())
        .merge(tables::router())
        .merge(deliveries::router())
        .merge(reports::router())
}

/// Slow handlers are answered with 408
fn request_timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Build a fully configured application with all middleware and state
///
/// Used by both the HTTP server and in-process (oneshot) calls.
pub fn build_app(state: &ServerState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    build_router()
        .with_state(state.clone())
        // ========== Tower HTTP Middleware ==========
        // Timeout - innermost, applies to the handler only
        .layer(request_timeout_layer(state.config.request_timeout()))
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        // Request ID - outermost, generated before anything else runs
        .layer(SetRequestIdLayer::new(request_id, XRequestId))
}
