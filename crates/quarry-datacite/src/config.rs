//! Configuration for the DataCite client

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default DataCite REST API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.datacite.org";

/// Default search page size
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default timeout for provider requests (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the DataCite client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataCiteConfig {
    /// Base URL of the DataCite REST API
    pub base_url: String,

    /// Search page size when the caller does not specify one
    pub page_size: u32,

    /// Maximum time for a single provider request (seconds)
    pub timeout_secs: u64,
}

impl DataCiteConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("base_url must be an http(s) URL".to_string());
        }
        if self.page_size == 0 {
            return Err("page_size must be greater than 0".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Build a configuration from the environment
    ///
    /// Honors `DATACITE_BASE_URL`; everything else takes defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("DATACITE_BASE_URL") {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        config
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for DataCiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DataCiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = DataCiteConfig::default();
        config.base_url = String::new();
        assert!(config.validate().is_err());
        config.base_url = "ftp://example.org".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_page_size() {
        let mut config = DataCiteConfig::default();
        config.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DataCiteConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = DataCiteConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.base_url, parsed.base_url);
        assert_eq!(config.page_size, parsed.page_size);
        assert_eq!(config.timeout_secs, parsed.timeout_secs);
    }
}
