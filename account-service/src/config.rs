//! Configuration for the account service

use common::error::{Error, Result};

/// Default host the service binds to
pub const DEFAULT_HOST: &str = "localhost";

/// Default port the service binds to
pub const DEFAULT_PORT: u16 = 5000;

/// Filter directives enabling `level` for the service's own crates
///
/// Only the `--log-level` flag drives logging; the environment is not read.
pub fn log_directives(level: &str) -> String {
    format!("account_service={},common={}", level, level)
}

/// Configuration for the account service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountServiceConfig {
    /// Host name or address to listen on
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AccountServiceConfig {
    /// Create a new configuration with custom values
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// Address in `host:port` form, suitable for binding a listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check the configuration before binding
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::ConfigurationError("host must not be empty".to_string()));
        }
        Ok(())
    }
}
