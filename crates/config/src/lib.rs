pub mod models;

pub use models::{ApiConfig, AppConfig, DatabaseConfig, DispatcherConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置加载失败: {0}")]
    Load(#[from] config::ConfigError),
    #[error("配置校验失败: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 配置段校验抽象
pub trait ConfigValidator {
    fn validate(&self) -> ConfigResult<()>;
}
