use thiserror::Error;

/// 启动和运行期错误 (请求级错误使用 `AppError`)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("演示数据加载失败: {0}")]
    Seed(String),

    #[error("网络错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
