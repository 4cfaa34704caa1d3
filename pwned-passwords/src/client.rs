//! Asynchronous breach-check client.

use reqwest::header;
use tracing::debug;

use crate::config::PwnedConfig;
use crate::error::Error;
use crate::response::RangeResponse;
use crate::{hash_password, split_hash};

/// `User-Agent` sent with every request, identifying this crate and its
/// version.
pub(crate) const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Request header asking the service to pad the response.
pub(crate) const ADD_PADDING: &str = "Add-Padding";

/// Asynchronous client for the Pwned Passwords range API.
///
/// Cheap to clone (the underlying connection pool is shared) and safe to
/// use from concurrent tasks: every check is one independent request with
/// no shared mutable state. Each call makes exactly one attempt; there are
/// no retries.
#[derive(Debug, Clone)]
pub struct PwnedPasswords {
    http: reqwest::Client,
    config: PwnedConfig,
}

impl PwnedPasswords {
    /// Create a client with the given configuration.
    pub fn new(config: PwnedConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Create a client over an existing reqwest client, e.g. one shared
    /// with the rest of the application. Also the injection point for
    /// tests.
    pub fn with_http_client(http: reqwest::Client, config: PwnedConfig) -> Self {
        Self { http, config }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &PwnedConfig {
        &self.config
    }

    /// Check a password against the breach database.
    ///
    /// Returns the number of times the password appears in known breaches;
    /// 0 means it was not found. Failures to reach or parse the service are
    /// surfaced as [`Error`] rather than folded into 0, so callers can
    /// apply their own fallback policy.
    pub async fn check_password(&self, password: &str) -> Result<u64, Error> {
        let hash = hash_password(password);
        let (prefix, suffix) = split_hash(&hash);
        let range = self.range(prefix).await?;
        Ok(range.count_for(suffix))
    }

    /// Fetch and parse the known suffixes for a 5-character hash prefix.
    pub async fn range(&self, prefix: &str) -> Result<RangeResponse, Error> {
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
            .header(header::USER_AGENT, USER_AGENT);
        if self.config.add_padding {
            request = request.header(ADD_PADDING, "true");
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::from_transport(prefix, e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                prefix: prefix.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::from_transport(prefix, e))?;
        RangeResponse::parse(prefix, &body)
    }
}

impl Default for PwnedPasswords {
    fn default() -> Self {
        Self::new(PwnedConfig::default())
    }
}
