//! Reports API 模块 (报表)
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/reports/sales | GET | 销售报表 (`from`/`to`: YYYY-MM-DD, 含) |
//! | /api/reports/history | GET | 历史订单 + 统计 |
//! | /api/reports/history.csv | GET | 历史订单导出 |
//! | /api/reports/dashboard | GET | 首页概览 |
//!
//! 日期按业务时区 (`TIMEZONE`) 解释。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reports", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/sales", get(handler::sales))
        .route("/history", get(handler::history))
        .route("/history.csv", get(handler::history_csv))
        .route("/dashboard", get(handler::dashboard))
}
