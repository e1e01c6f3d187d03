use crate::{ConfigError, ConfigErrorResult, DEFAULT_DEBOUNCE_MS, MAX_DEBOUNCE_MS};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a search fires
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::search(format!(
                "search.debounce_ms must be 0-{}, got {}",
                MAX_DEBOUNCE_MS, self.debounce_ms
            )));
        }
        Ok(())
    }
}
