//! POS Server - 餐厅订单账本服务
//!
//! # 架构概述
//!
//! - **目录** (`catalog`): 菜单、库存、顾客
//! - **计价** (`pricing`): 小计、折扣、税、小费、分单 (纯函数)
//! - **订单账本** (`orders`): 订单状态机、厨房工单、桌台、外卖、事件日志
//! - **厨房** (`kitchen`): 由订单派生厨房工单
//! - **支付** (`payment`): 支付网关接口 + 结账流程
//! - **报表** (`reports`): 销售报表、历史统计、CSV 导出
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! pos-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── catalog/       # 菜单、库存、顾客
//! ├── pricing/       # 金额计算
//! ├── orders/        # 订单账本
//! ├── kitchen/       # 厨房工单派生
//! ├── delivery/      # 追踪码
//! ├── payment/       # 支付网关、结账
//! ├── reports/       # 报表
//! └── utils/         # 日志、时区
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod delivery;
pub mod kitchen;
pub mod orders;
pub mod payment;
pub mod pricing;
pub mod reports;
pub mod utils;

// Re-export 公共类型
pub use catalog::CatalogService;
pub use crate::core::{Config, Server, ServerState};
pub use orders::{LedgerError, OrderLedger};
pub use payment::{Cashier, PaymentGateway, SimulatedGateway};
pub use utils::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 加载 `.env` 并初始化日志
///
/// `.env` 不存在时忽略。日志级别和目录直接读取 `LOG_LEVEL` / `LOG_DIR`，
/// 因为日志需要在配置加载之前就绪。
pub fn setup_environment() {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to load .env: {}", e);
    }

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
    ____  ____  _____
   / __ \/ __ \/ ___/
  / /_/ / / / /\__ \
 / ____/ /_/ /___/ /
/_/    \____//____/
        Order Ledger v{}
    "#,
        env!("CARGO_PKG_VERSION")
    );
}
