//! Configuration for the PlanetEarth API gateway

use std::time::Duration;

use planetearth_types::Endpoint;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://planetearth.kr/api";

/// API gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL; endpoints resolve to `<base_url>/<endpoint>.php`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent as the `key` query parameter when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Per-request timeout; the transport default applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_secs: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}.php", self.base_url.trim_end_matches('/'), endpoint)
    }
}
