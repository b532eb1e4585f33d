// Application state module
// Holds everything a connection task needs, shared read-only across tasks

use std::io;
use std::path::Path;

use super::types::{Config, PerformanceConfig};
use crate::gateway::ConfigFileGateway;
use crate::logger::AccessLogWriter;

/// Application state
pub struct AppState {
    pub gateway: ConfigFileGateway,
    pub performance: PerformanceConfig,
    /// `None` when access logging is disabled
    pub access_log: Option<AccessLogWriter>,
    pub access_log_format: String,
}

impl AppState {
    /// Build state from configuration, resolving `config_dir` against the working directory
    pub fn new(config: &Config) -> io::Result<Self> {
        let base_dir = std::env::current_dir()?.join(&config.gateway.config_dir);
        let gateway = ConfigFileGateway::new(config.gateway.secret_source(), base_dir)
            .with_strict_paths(config.gateway.strict_paths);
        Self::with_gateway(config, gateway)
    }

    /// Build state around an already constructed gateway
    pub fn with_gateway(config: &Config, gateway: ConfigFileGateway) -> io::Result<Self> {
        let access_log = if config.logging.access_log {
            Some(AccessLogWriter::open(
                config.logging.access_log_file.as_deref(),
            )?)
        } else {
            None
        };

        Ok(Self {
            gateway,
            performance: config.performance.clone(),
            access_log,
            access_log_format: config.logging.access_log_format.clone(),
        })
    }

    pub fn base_dir(&self) -> &Path {
        self.gateway.base_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::FixedSecret;
    use std::sync::Arc;

    #[test]
    fn test_base_dir_borrows_gateway_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = Config::load_from(dir.path().join("absent").to_str().unwrap()).unwrap();
        cfg.logging.access_log = false;
        let source = FixedSecret::new("ACCESS_TOKEN", None);
        let gateway = ConfigFileGateway::new(Arc::new(source), dir.path().join("config"));

        let state = AppState::with_gateway(&cfg, gateway).unwrap();
        assert_eq!(state.base_dir(), dir.path().join("config").as_path());
        assert!(state.access_log.is_none());
    }
}
