//! Ledger events API (审计日志)
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/events?since= | GET | 序号大于 `since` 的事件 (按序号升序) |

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use shared::order::LedgerEvent;

use crate::core::ServerState;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/events", get(list))
}

#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    #[serde(default)]
    pub since: u64,
}

/// GET /api/events
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<EventsQuery>,
) -> AppResult<Json<Vec<LedgerEvent>>> {
    Ok(Json(state.ledger.events_since(query.since)))
}
