use crate::{ConfigError, ConfigErrorResult, DEFAULT_BASE_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Root URL of the ticket API, e.g. "http://localhost:5000"
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::gateway(format!(
                "gateway.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }
}
