mod board_config;
mod config;
mod error;
mod gateway_config;
mod log_level;
mod logging_config;
mod search_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use board_config::BoardConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use gateway_config::GatewayConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use search_config::SearchConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "TB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".tb";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const DEFAULT_DEBOUNCE_MS: u64 = 500;
const MAX_DEBOUNCE_MS: u64 = 10_000;

const DEFAULT_ROLLBACK_ON_FAILURE: bool = false;

const DEFAULT_SESSION_FILENAME: &str = "session.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
