//! Configuration Management
//!
//! Client configuration for the ARM endpoint. Values resolve in order:
//! explicit setter > environment variable > built-in default.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Azure Resource Manager endpoint (public cloud)
pub const DEFAULT_ENDPOINT: &str = "https://management.azure.com";

/// API version of the Microsoft.Sql elastic pools surface
pub const DEFAULT_API_VERSION: &str = "2017-10-01-preview";

/// Default per-request timeout
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Azure subscription to address
    #[serde(default)]
    pub subscription_id: Option<String>,
    /// Resource Manager endpoint override (sovereign clouds, emulators, tests)
    #[serde(default)]
    pub endpoint: Option<String>,
    /// API version override
    #[serde(default)]
    pub api_version: Option<String>,
    /// Per-request timeout in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Config {
    /// Build a configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            subscription_id: std::env::var("AZURE_SUBSCRIPTION_ID").ok(),
            endpoint: std::env::var("AZURE_RESOURCE_MANAGER_ENDPOINT").ok(),
            api_version: None,
            timeout_ms: None,
        }
    }

    /// Set the subscription ID
    pub fn with_subscription_id(mut self, subscription_id: &str) -> Self {
        self.subscription_id = Some(subscription_id.to_string());
        self
    }

    /// Set the Resource Manager endpoint
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }

    /// Set the API version
    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = Some(api_version.to_string());
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    /// Get the effective subscription ID (setter > env > empty)
    pub fn effective_subscription(&self) -> String {
        self.subscription_id.clone().unwrap_or_default()
    }

    /// Get the effective endpoint, without trailing slash
    pub fn effective_endpoint(&self) -> String {
        let endpoint = self
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        endpoint.trim_end_matches('/').to_string()
    }

    /// Get the effective API version
    pub fn effective_api_version(&self) -> String {
        self.api_version
            .clone()
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string())
    }

    /// Get the effective request timeout
    pub fn effective_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::default();
        assert_eq!(config.effective_endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.effective_api_version(), DEFAULT_API_VERSION);
        assert_eq!(config.effective_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn setters_override_defaults() {
        let config = Config::default()
            .with_subscription_id("sub-123")
            .with_endpoint("https://localhost:8443/")
            .with_api_version("2021-02-01");
        assert_eq!(config.effective_subscription(), "sub-123");
        // Trailing slash is stripped so URL joining stays predictable
        assert_eq!(config.effective_endpoint(), "https://localhost:8443");
        assert_eq!(config.effective_api_version(), "2021-02-01");
    }

    #[test]
    fn sub_second_timeouts_are_preserved() {
        let config = Config::default().with_timeout(Duration::from_millis(250));
        assert_eq!(config.effective_timeout(), Duration::from_millis(250));
    }
}
