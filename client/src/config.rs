//! Client configuration from environment variables

use std::time::Duration;

/// Default base URL of the API gateway (local development address)
const DEFAULT_BASE_URL: &str = "http://localhost:4004";

/// Overall timeout applied to regular API requests
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Deadline for a single health probe
const DEFAULT_HEALTH_PROBE_TIMEOUT: Duration = Duration::from_millis(3000);

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API gateway, without a trailing slash
    pub base_url: String,
    /// Overall timeout for regular API requests
    pub request_timeout: Duration,
    /// Per-probe deadline for health checks
    pub health_probe_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            health_probe_timeout: DEFAULT_HEALTH_PROBE_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let base_url = std::env::var("PM_API_BASE_URL")
            .map(|url| normalize_base_url(&url))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let health_probe_timeout = std::env::var("PM_HEALTH_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_HEALTH_PROBE_TIMEOUT);

        Self {
            base_url,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            health_probe_timeout,
        }
    }

    /// Build a config for a specific gateway address, keeping default timeouts
    pub fn with_base_url(base_url: &str) -> Self {
        Self::default().override_base_url(base_url)
    }

    /// Replace the gateway address, keeping every other setting
    pub fn override_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }
}

/// Request paths always start with `/`, so the base URL must not end with one
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
