use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult, ConfigValidator};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// 选派策略名称: first_available | nearest
    pub strategy: String,
    /// 启动时在空库中写入演示用响应人员
    pub seed_demo_data: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            strategy: "first_available".to_string(),
            seed_demo_data: true,
        }
    }
}

impl ConfigValidator for DispatcherConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.strategy.as_str() {
            "first_available" | "nearest" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "dispatcher.strategy must be first_available or nearest, got: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatcher_config_validation() {
        assert!(DispatcherConfig::default().validate().is_ok());

        let nearest = DispatcherConfig {
            strategy: "nearest".to_string(),
            seed_demo_data: false,
        };
        assert!(nearest.validate().is_ok());

        let invalid = DispatcherConfig {
            strategy: "round_robin".to_string(),
            seed_demo_data: false,
        };
        assert!(invalid.validate().is_err());
    }
}
