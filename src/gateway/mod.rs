//! Config file gateway
//!
//! Validates the caller's token and requested filename, then serves the YAML
//! file from the config directory. Checks run in a fixed order and the first
//! failure decides the response.

mod error;
mod params;
pub mod path;
pub mod secret;

pub use error::GatewayError;
pub use params::RequestParams;
pub use secret::{EnvSecret, FixedSecret, SecretSource};

use crate::logger::{self, ErrorSink, TracingErrorSink};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

/// Serves `.yaml` files from a single flat directory behind a shared secret
pub struct ConfigFileGateway {
    secret: Arc<dyn SecretSource>,
    base_dir: PathBuf,
    strict_paths: bool,
    error_sink: Arc<dyn ErrorSink>,
}

impl ConfigFileGateway {
    pub fn new(secret: Arc<dyn SecretSource>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            secret,
            base_dir: base_dir.into(),
            strict_paths: true,
            error_sink: Arc::new(TracingErrorSink),
        }
    }

    /// Toggle the canonical containment check run after the existence check
    #[must_use]
    pub const fn with_strict_paths(mut self, strict: bool) -> Self {
        self.strict_paths = strict;
        self
    }

    #[must_use]
    pub fn with_error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.error_sink = sink;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Run the validation sequence and return the file content on success
    pub async fn handle(&self, params: &RequestParams) -> Result<String, GatewayError> {
        let secret = self
            .secret
            .current()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| GatewayError::MissingSecret(self.secret.name().to_string()))?;

        if params.token.as_deref() != Some(secret.as_str()) {
            return Err(GatewayError::Unauthorized);
        }

        let file_name = path::validate_file_name(params.file.as_deref())?;
        let file_path = path::resolve(&self.base_dir, file_name);

        self.check_exists(&file_path).await?;

        let content = fs::read(&file_path)
            .await
            .map_err(|e| self.io_failure(&file_path, e))?;

        Ok(String::from_utf8_lossy(&content).into_owned())
    }

    async fn check_exists(&self, file_path: &Path) -> Result<(), GatewayError> {
        match fs::try_exists(file_path).await {
            Ok(true) => {}
            Ok(false) => return Err(GatewayError::NotFound),
            Err(e) if is_unaddressable(&e) => return Err(GatewayError::NotFound),
            Err(e) => return Err(self.io_failure(file_path, e)),
        }

        if self.strict_paths {
            self.check_contained(file_path).await?;
        }
        Ok(())
    }

    async fn check_contained(&self, file_path: &Path) -> Result<(), GatewayError> {
        let base = fs::canonicalize(&self.base_dir)
            .await
            .map_err(|e| self.io_failure(&self.base_dir, e))?;
        let file = fs::canonicalize(file_path)
            .await
            .map_err(|e| self.io_failure(file_path, e))?;

        if path::is_contained(&base, &file) {
            Ok(())
        } else {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {} -> {}",
                file_path.display(),
                file.display()
            ));
            Err(GatewayError::NotFound)
        }
    }

    fn io_failure(&self, path: &Path, err: io::Error) -> GatewayError {
        self.error_sink
            .record_error(&format!("Failed to read '{}': {err}", path.display()));
        GatewayError::Io(err)
    }
}

/// Errors meaning the name cannot address any file, as opposed to a failing filesystem
fn is_unaddressable(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotADirectory | io::ErrorKind::InvalidFilename | io::ErrorKind::InvalidInput
    )
}
