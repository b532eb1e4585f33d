// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub gateway: GatewayConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common or json)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
}

impl PerformanceConfig {
    /// Upper bound on the lifetime of one connection, in seconds
    pub fn connection_timeout_secs(&self) -> u64 {
        std::cmp::max(self.read_timeout, self.write_timeout)
    }
}

/// Gateway configuration
#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    /// Directory holding the served `.yaml` files, relative to the working directory
    pub config_dir: String,
    /// Environment variable read on each request when `access_token` is unset
    pub token_env: String,
    /// Fixed secret; takes precedence over `token_env`
    #[serde(default)]
    pub access_token: Option<String>,
    /// Canonicalize served files and require them to stay inside `config_dir`
    pub strict_paths: bool,
}
