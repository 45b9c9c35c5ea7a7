use std::sync::Arc;

use chrono_tz::Tz;

use crate::catalog::CatalogService;
use crate::catalog::seed::seed_catalog;
use crate::core::{Config, Result, ServerError};
use crate::orders::OrderLedger;
use crate::payment::{Cashier, PaymentGateway, SimulatedGateway};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 一次。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | CatalogService | 菜单、库存、顾客 |
/// | ledger | Arc<OrderLedger> | 订单账本 (订单、厨房、桌台、外卖) |
/// | cashier | Arc<Cashier> | 结账流程 (支付网关 + 账本) |
/// | tz | Tz | 业务时区 |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: CatalogService,
    pub ledger: Arc<OrderLedger>,
    pub cashier: Arc<Cashier>,
    pub tz: Tz,
}

impl ServerState {
    /// 使用模拟支付网关初始化
    pub fn initialize(config: &Config) -> Result<Self> {
        let gateway = Arc::new(SimulatedGateway::new(config.payment_delay()));
        Self::with_gateway(config, gateway)
    }

    /// 使用指定的支付网关初始化
    ///
    /// `SEED_DEMO_DATA` 开启时加载演示菜单、库存、顾客和桌台。
    pub fn with_gateway(config: &Config, gateway: Arc<dyn PaymentGateway>) -> Result<Self> {
        config.validate().map_err(ServerError::Config)?;

        let catalog = CatalogService::new();
        let ledger = Arc::new(OrderLedger::new(catalog.clone(), config.ledger_settings()));

        if config.seed_demo_data {
            seed_catalog(&catalog).map_err(|e| ServerError::Seed(e.to_string()))?;
            ledger
                .seed_tables(config.table_count)
                .map_err(|e| ServerError::Seed(e.to_string()))?;
            tracing::info!(tables = config.table_count, "Demo data loaded");
        }

        let cashier = Arc::new(Cashier::new(ledger.clone(), gateway, config.payment_timeout()));

        Ok(Self {
            config: config.clone(),
            catalog,
            ledger,
            cashier,
            tz: config.tz(),
        })
    }
}
