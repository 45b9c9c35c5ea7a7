use std::time::Duration;

use chrono_tz::Tz;

use crate::orders::LedgerSettings;
use crate::pricing::tax_rate_from_percent;
use crate::utils::time::parse_timezone;

/// 服务器配置 - POS 服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，设置后按天滚动写文件 |
/// | TAX_RATE_PERCENT | 10 | 服务税率 (%) |
/// | AUTO_OCCUPY_TABLES | false | 堂食下单自动占用桌台 |
/// | PAYMENT_TIMEOUT_MS | 5000 | 支付网关超时(毫秒) |
/// | PAYMENT_DELAY_MS | 0 | 模拟网关延迟(毫秒) |
/// | TIMEZONE | UTC | 业务时区 (IANA) |
/// | MENU_BASE_URL | https://restaurant.com/menu | 桌台二维码菜单地址 |
/// | SEED_DEMO_DATA | true | 启动时加载演示数据 |
/// | TABLE_COUNT | 12 | 演示桌台数量 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 TAX_RATE_PERCENT=12 TIMEZONE=America/Sao_Paulo cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,

    // === 账本配置 ===
    /// 服务税率 (百分比)
    pub tax_rate_percent: f64,
    pub auto_occupy_tables: bool,
    /// 桌台二维码指向的菜单地址
    pub menu_base_url: String,
    /// 业务时区 (报表、历史按此时区分日)
    pub timezone: String,

    // === 支付 ===
    pub payment_timeout_ms: u64,
    pub payment_delay_ms: u64,

    // === 演示数据 ===
    pub seed_demo_data: bool,
    pub table_count: u32,

    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            http_port: parse_or(get("HTTP_PORT"), 3000),
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: get("LOG_DIR").filter(|d| !d.trim().is_empty()),

            tax_rate_percent: parse_or(get("TAX_RATE_PERCENT"), 10.0),
            auto_occupy_tables: parse_or(get("AUTO_OCCUPY_TABLES"), false),
            menu_base_url: get("MENU_BASE_URL")
                .unwrap_or_else(|| "https://restaurant.com/menu".into()),
            timezone: get("TIMEZONE").unwrap_or_else(|| "UTC".into()),

            payment_timeout_ms: parse_or(get("PAYMENT_TIMEOUT_MS"), 5000),
            payment_delay_ms: parse_or(get("PAYMENT_DELAY_MS"), 0),

            seed_demo_data: parse_or(get("SEED_DEMO_DATA"), true),
            table_count: parse_or(get("TABLE_COUNT"), 12),

            request_timeout_ms: parse_or(get("REQUEST_TIMEOUT_MS"), 30000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, seed_demo_data: bool) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.seed_demo_data = seed_demo_data;
        config
    }

    /// 检查取值范围，启动时调用
    pub fn validate(&self) -> Result<(), String> {
        if !self.tax_rate_percent.is_finite() || !(0.0..=100.0).contains(&self.tax_rate_percent) {
            return Err(format!(
                "TAX_RATE_PERCENT must be within 0..=100, got {}",
                self.tax_rate_percent
            ));
        }
        if self.payment_timeout_ms == 0 {
            return Err("PAYMENT_TIMEOUT_MS must be positive".to_string());
        }
        Ok(())
    }

    pub fn ledger_settings(&self) -> LedgerSettings {
        LedgerSettings {
            tax_rate: tax_rate_from_percent(self.tax_rate_percent),
            auto_occupy_tables: self.auto_occupy_tables,
            menu_base_url: self.menu_base_url.clone(),
        }
    }

    /// 业务时区，无法解析时为 UTC
    pub fn tz(&self) -> Tz {
        parse_timezone(&self.timezone)
    }

    pub fn payment_timeout(&self) -> Duration {
        Duration::from_millis(self.payment_timeout_ms)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
