//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a Pwned Passwords range API client.
///
/// Every field has a default matching the public service, so
/// `PwnedConfig::default()` is a working production configuration. The
/// config is fixed at client construction; there is no mutable state on a
/// running client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PwnedConfig {
    /// Base URL of the range endpoint, with or without a trailing slash.
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
    /// Request timeout in seconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_seconds: f64,
    /// Ask the service to pad each response to a uniform size band so the
    /// number of suffixes in a range cannot be inferred from response size.
    #[serde(default = "default_add_padding")]
    pub add_padding: bool,
}

impl PwnedConfig {
    /// The configured timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.api_timeout_seconds)
    }
}

impl Default for PwnedConfig {
    fn default() -> Self {
        Self {
            api_endpoint: default_api_endpoint(),
            api_timeout_seconds: default_api_timeout(),
            add_padding: default_add_padding(),
        }
    }
}

fn default_api_endpoint() -> String {
    "https://api.pwnedpasswords.com/range".to_string()
}

fn default_api_timeout() -> f64 {
    1.0
}

fn default_add_padding() -> bool {
    true
}
