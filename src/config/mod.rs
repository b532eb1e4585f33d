// Configuration module entry point
// Loads layered configuration and builds the shared application state

mod state;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::gateway::secret::DEFAULT_TOKEN_ENV;
use crate::gateway::{EnvSecret, FixedSecret, SecretSource};

// Re-export public types
pub use state::AppState;
pub use types::{Config, GatewayConfig, LoggingConfig, PerformanceConfig, ServerConfig};

/// Prefix for environment overrides, e.g. `GATEWAY_SERVER__PORT`
const ENV_PREFIX: &str = "GATEWAY";

impl Config {
    /// Load configuration from specified file path (extension optional)
    /// A missing file is not an error; defaults and environment still apply
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("gateway.config_dir", "config")?
            .set_default("gateway.token_env", DEFAULT_TOKEN_ENV)?
            .set_default("gateway.strict_paths", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

impl GatewayConfig {
    /// Build the secret source: a fixed token wins over the environment lookup
    pub fn secret_source(&self) -> Arc<dyn SecretSource> {
        match &self.access_token {
            Some(token) => Arc::new(FixedSecret::new(
                "gateway.access_token",
                Some(token.clone()),
            )),
            None => Arc::new(EnvSecret::new(self.token_env.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let cfg = Config::load_from(missing.to_str().unwrap()).unwrap();

        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert_eq!(cfg.performance.connection_timeout_secs(), 30);
        assert_eq!(cfg.gateway.config_dir, "config");
        assert_eq!(cfg.gateway.token_env, "ACCESS_TOKEN");
        assert!(cfg.gateway.access_token.is_none());
        assert!(cfg.gateway.strict_paths);
        assert_eq!(cfg.get_socket_addr().unwrap().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gateway.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 9123

[logging]
access_log = false

[gateway]
config_dir = "/srv/clash"
access_token = "from-file"
strict_paths = false
"#,
        )
        .unwrap();

        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9123);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert!(!cfg.logging.access_log);
        assert_eq!(cfg.gateway.config_dir, "/srv/clash");
        assert!(!cfg.gateway.strict_paths);

        let source = cfg.gateway.secret_source();
        assert_eq!(source.current().as_deref(), Some("from-file"));
    }

    #[test]
    fn test_env_secret_source_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(dir.path().join("absent").to_str().unwrap()).unwrap();
        assert_eq!(cfg.gateway.secret_source().name(), "ACCESS_TOKEN");
    }

    #[tokio::test]
    async fn test_env_secret_followed_per_request() {
        use crate::gateway::{ConfigFileGateway, GatewayError, RequestParams};

        let var = "CONFIG_GATEWAY_TEST_PER_REQUEST_TOKEN";
        std::env::remove_var(var);
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("example.yaml"), "key: value").unwrap();

        let mut cfg = Config::load_from(dir.path().join("absent").to_str().unwrap()).unwrap();
        cfg.gateway.token_env = var.to_string();
        let gateway = ConfigFileGateway::new(cfg.gateway.secret_source(), dir.path());
        let params = RequestParams::new(Some("rotating"), Some("example.yaml"));

        let err = gateway.handle(&params).await.unwrap_err();
        assert!(matches!(err, GatewayError::MissingSecret(ref name) if name == var));
        assert_eq!(err.status(), 500);

        std::env::set_var(var, "rotating");
        assert_eq!(gateway.handle(&params).await.unwrap(), "key: value");

        std::env::remove_var(var);
        assert!(matches!(
            gateway.handle(&params).await,
            Err(GatewayError::MissingSecret(_))
        ));
    }

    #[test]
    fn test_invalid_address() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = Config::load_from(dir.path().join("absent").to_str().unwrap()).unwrap();
        cfg.server.host = "not an ip".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
