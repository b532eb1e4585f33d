//! Token-gated HTTP gateway serving YAML files from a single config directory.

pub mod config;
pub mod gateway;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
