use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{ApiConfig, DatabaseConfig, DispatcherConfig};
use crate::{ConfigError, ConfigValidator};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub dispatcher: DispatcherConfig,
}

impl AppConfig {
    /// 加载配置：TOML 文件（可选）+ RESPOND__ 前缀环境变量覆盖 + 内置默认值
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_path {
            if Path::new(path).exists() {
                builder = builder.add_source(File::new(path, FileFormat::Toml));
            } else {
                return Err(anyhow::anyhow!("配置文件不存在: {path}"));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("RESPOND")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder
            .build()
            .map_err(ConfigError::Load)
            .context("构建配置失败")?
            .try_deserialize()
            .map_err(ConfigError::Load)
            .context("解析配置失败")?;

        config.validate_all()?;
        Ok(config)
    }

    fn validate_all(&self) -> Result<()> {
        self.database.validate().context("database 配置无效")?;
        self.api.validate().context("api 配置无效")?;
        self.dispatcher.validate().context("dispatcher 配置无效")?;
        Ok(())
    }
}
