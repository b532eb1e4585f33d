//! Server secret sources
//!
//! The secret is looked up on every request so that an environment-backed
//! source observes the current process environment.

/// Default environment variable holding the access token
pub const DEFAULT_TOKEN_ENV: &str = "ACCESS_TOKEN";

/// Supplies the shared secret that callers must present
pub trait SecretSource: Send + Sync {
    /// Name used in the misconfiguration message
    fn name(&self) -> &str;

    /// Current secret, `None` when unset
    fn current(&self) -> Option<String>;
}

/// Secret read from an environment variable at request time
#[derive(Debug, Clone)]
pub struct EnvSecret {
    var: String,
}

impl EnvSecret {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvSecret {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_ENV)
    }
}

impl SecretSource for EnvSecret {
    fn name(&self) -> &str {
        &self.var
    }

    fn current(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// Secret fixed at construction
#[derive(Debug, Clone)]
pub struct FixedSecret {
    name: String,
    value: Option<String>,
}

impl FixedSecret {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl SecretSource for FixedSecret {
    fn name(&self) -> &str {
        &self.name
    }

    fn current(&self) -> Option<String> {
        self.value.clone()
    }
}
