use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult, ConfigValidator};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub bind_address: String,
    pub cors_enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            cors_enabled: true,
        }
    }
}

impl ConfigValidator for ApiConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.bind_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "api.bind_address is not a valid socket address: {}",
                self.bind_address
            )));
        }
        Ok(())
    }
}
