//! Synchronous breach-check client.
//!
//! Mirrors the asynchronous [`crate::PwnedPasswords`] over reqwest's
//! blocking transport, for callers that do not run an async runtime. Both
//! paths share the same hashing and parsing core and speak the same wire
//! contract. The blocking transport panics if used from inside an async
//! runtime; use the async client there.

use tracing::debug;

use crate::client::{ADD_PADDING, USER_AGENT};
use crate::config::PwnedConfig;
use crate::error::Error;
use crate::response::RangeResponse;
use crate::{hash_password, split_hash};

/// Synchronous client for the Pwned Passwords range API.
///
/// Semantics are identical to the async [`crate::PwnedPasswords`]: one
/// attempt per check, no retries, failures surfaced rather than folded
/// into 0.
#[derive(Debug, Clone)]
pub struct PwnedPasswords {
    http: reqwest::blocking::Client,
    config: PwnedConfig,
}

impl PwnedPasswords {
    /// Create a client with the given configuration.
    pub fn new(config: PwnedConfig) -> Self {
        Self::with_http_client(reqwest::blocking::Client::new(), config)
    }

    /// Create a client over an existing blocking reqwest client.
    pub fn with_http_client(http: reqwest::blocking::Client, config: PwnedConfig) -> Self {
        Self { http, config }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &PwnedConfig {
        &self.config
    }

    /// Check a password against the breach database, blocking until the
    /// single outbound request completes or times out.
    pub fn check_password(&self, password: &str) -> Result<u64, Error> {
        let hash = hash_password(password);
        let (prefix, suffix) = split_hash(&hash);
        let range = self.range(prefix)?;
        Ok(range.count_for(suffix))
    }

    /// Fetch and parse the known suffixes for a 5-character hash prefix.
    pub fn range(&self, prefix: &str) -> Result<RangeResponse, Error> {
        debug!(prefix, "querying Pwned Passwords range API");
        let url = format!(
            "{}/{}",
            self.config.api_endpoint.trim_end_matches('/'),
            prefix
        );

        let mut request = self
            .http
            .get(&url)
            .timeout(self.config.timeout())
            .header(reqwest::header::USER_AGENT, USER_AGENT);
        if self.config.add_padding {
            request = request.header(ADD_PADDING, "true");
        }

        let response = request.send().map_err(|e| Error::from_transport(prefix, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                prefix: prefix.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| Error::from_transport(prefix, e))?;
        RangeResponse::parse(prefix, &body)
    }
}

impl Default for PwnedPasswords {
    fn default() -> Self {
        Self::new(PwnedConfig::default())
    }
}
