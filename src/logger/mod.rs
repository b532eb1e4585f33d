//! Logger module
//!
//! Provides logging utilities for the gateway including:
//! - `tracing` subscriber setup for operational and error logs
//! - Access logging with multiple formats
//! - The `ErrorSink` capability injected into the gateway

mod format;
mod sink;
pub mod writer;

pub use format::{redact_query, AccessLogEntry};
pub use sink::{ErrorSink, TracingErrorSink};
pub use writer::AccessLogWriter;

use crate::config::{Config, LoggingConfig};
use std::io;
use std::net::SocketAddr;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Initialize the global `tracing` subscriber
///
/// Should be called once at application startup. `RUST_LOG` overrides
/// `logging.level` when set.
pub fn init(config: &LoggingConfig) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match config.error_log_file.as_deref() {
        Some(path) => {
            let file = writer::open_log_file(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };

    result.map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, base_dir: &std::path::Path) {
    tracing::info!("Config gateway listening on http://{addr}");
    tracing::info!("Serving *.yaml from {}", base_dir.display());
    tracing::info!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        tracing::info!("Worker threads: {workers}");
    }
    if let Some(ref path) = config.logging.access_log_file {
        tracing::info!("Access log: {path}");
    }
    if !config.gateway.strict_paths {
        tracing::warn!("Strict path containment is disabled");
    }
}

pub fn log_server_stop() {
    tracing::info!("Shutdown signal received, no longer accepting connections");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    tracing::error!("Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    tracing::error!("{message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("{message}");
}
