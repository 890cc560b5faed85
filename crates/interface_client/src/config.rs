//! Client configuration
//!
//! Loaded once at startup and never mutated afterwards; the client keeps it
//! behind an `Arc` and every service reads the same copy.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;

use crate::error::ClientError;

/// Environment variable prefix, e.g. `INSURANCE_BASE_URL`
pub const ENV_PREFIX: &str = "INSURANCE";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Backend origin the `/api/...` paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds, 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            headers: HashMap::new(),
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from `INSURANCE_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(None)
    }

    /// Loads configuration from an optional file, overridden by the environment
    pub fn load(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }

        builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Validates the configured headers into a `HeaderMap`
    pub fn header_map(&self) -> Result<HeaderMap, ClientError> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::InvalidConfig(format!("header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::InvalidConfig(format!("header {name}: {e}")))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert!(config.headers.is_empty());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_header_map_validates_names() {
        let config = ClientConfig::default().with_header("bad header", "x");
        assert!(matches!(config.header_map(), Err(ClientError::InvalidConfig(_))));

        let config = ClientConfig::default().with_header("X-Tenant", "acme");
        let map = config.header_map().unwrap();
        assert_eq!(map.get("x-tenant").unwrap(), "acme");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "insurance-client-config-{}.toml",
            std::process::id()
        ));
        fs::write(
            &path,
            "base_url = \"http://backend.internal:9000\"\ntimeout_secs = 5\n\n[headers]\nX-Tenant = \"acme\"\n",
        )
        .unwrap();

        let config = ClientConfig::load(Some(&path)).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.base_url, "http://backend.internal:9000");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.log_level, "info");
        assert!(config.header_map().unwrap().contains_key("x-tenant"));
    }
}
