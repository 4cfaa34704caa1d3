//! Error taxonomy for breach-check requests.

/// Failure while checking a password against the breach database.
///
/// The client never folds a failure into a "not breached" result; every
/// variant here is surfaced to the caller, who decides whether to fail
/// open, fail closed, or fall back to a local list. Variants carry the
/// 5-character hash prefix of the failed request; the prefix reveals
/// nothing useful about the password.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request did not complete within the configured timeout.
    #[error("request for prefix {prefix} timed out")]
    Timeout {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status.
    #[error("HTTP {status} for prefix {prefix}")]
    HttpStatus { prefix: String, status: u16 },

    /// Transport-level failure: DNS resolution, connection refused or
    /// reset, TLS negotiation.
    #[error("request failed for prefix {prefix}: {source}")]
    Request {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    /// A line of the range response did not parse as `SUFFIX:COUNT`.
    #[error("malformed line {line:?} in range response for prefix {prefix}")]
    BadLine { prefix: String, line: String },

    /// Any other failure while reading or decoding the response body,
    /// wrapped for uniformity.
    #[error("unexpected error for prefix {prefix}: {source}")]
    Unknown {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },
}

impl Error {
    /// Classify a reqwest transport error into the taxonomy above.
    pub(crate) fn from_transport(prefix: &str, source: reqwest::Error) -> Self {
        let prefix = prefix.to_string();
        if source.is_timeout() {
            Error::Timeout { prefix, source }
        } else if source.is_connect() || source.is_request() {
            Error::Request { prefix, source }
        } else {
            Error::Unknown { prefix, source }
        }
    }

    /// The hash prefix of the request that failed.
    pub fn prefix(&self) -> &str {
        match self {
            Error::Timeout { prefix, .. }
            | Error::HttpStatus { prefix, .. }
            | Error::Request { prefix, .. }
            | Error::BadLine { prefix, .. }
            | Error::Unknown { prefix, .. } => prefix,
        }
    }
}
