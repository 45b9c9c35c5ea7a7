//! 核心模块：启动配置、共享状态与启动错误
//!
//! - [`Config`]: 环境变量配置 (税率、时区、支付超时...)
//! - [`ServerState`]: 菜单目录、订单账本、收银台的共享句柄
//! - [`Server`]: HTTP 监听与优雅退出
//! - [`ServerError`]: 启动期错误

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
