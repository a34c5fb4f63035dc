//! Configuration loading for the proxy
//!
//! Resolution priority: environment variable, then TOML file, then compiled
//! default. A missing or unreadable config file falls back to defaults with
//! a warning; it never aborts startup. Malformed TOML content is an error.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// Default engine control endpoint
const DEFAULT_ENGINE_URL: &str = "http://127.0.0.1:5720";

/// Default outbound request timeout in milliseconds
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Default update-bus capacity (messages buffered per subscriber)
const DEFAULT_UPDATE_CAPACITY: usize = 64;

/// Environment variable overriding the engine URL
pub const ENGINE_URL_ENV: &str = "TONEARM_ENGINE_URL";

/// Resolved proxy configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyConfig {
    /// Base URL of the engine's control endpoints
    pub engine_url: String,
    /// Timeout applied to each outbound command request
    pub request_timeout_ms: u64,
    /// Capacity of the push-update bus
    pub update_capacity: usize,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            engine_url: DEFAULT_ENGINE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            update_capacity: DEFAULT_UPDATE_CAPACITY,
        }
    }
}

/// TOML schema; every field optional so partial files stay valid
#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    engine_url: Option<String>,
    request_timeout_ms: Option<u64>,
    update_capacity: Option<usize>,
}

impl ProxyConfig {
    /// Resolve configuration from an optional TOML file and the environment
    pub fn resolve(config_file: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = config_file {
            match std::fs::read_to_string(path) {
                Ok(contents) => {
                    let parsed: TomlConfig = toml::from_str(&contents)
                        .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
                    if let Some(url) = parsed.engine_url {
                        config.engine_url = url;
                    }
                    if let Some(ms) = parsed.request_timeout_ms {
                        config.request_timeout_ms = ms;
                    }
                    if let Some(capacity) = parsed.update_capacity {
                        config.update_capacity = capacity;
                    }
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Config file unreadable; using defaults"
                    );
                }
            }
        }

        if let Ok(url) = std::env::var(ENGINE_URL_ENV) {
            config.engine_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.engine_url.is_empty() {
            return Err(Error::Config("engine_url must not be empty".to_string()));
        }
        if self.update_capacity == 0 {
            return Err(Error::Config(
                "update_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
