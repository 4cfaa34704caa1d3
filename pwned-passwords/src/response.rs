//! Parsing of range API responses.

use std::collections::HashMap;

use crate::error::Error;

/// Parsed body of a range query: every known hash suffix in the range,
/// mapped to the number of times it has been seen in breaches.
///
/// The wire format is plaintext, one `SUFFIX:COUNT` pair per line. Counts
/// have occasionally been served with thousands-separator commas; those
/// are stripped before parsing. Padded responses include suffixes with a
/// count of 0, which parse like any other line.
#[derive(Debug, Clone, Default)]
pub struct RangeResponse {
    by_suffix: HashMap<String, u64>,
}

impl RangeResponse {
    /// Parse a response body received for `prefix`.
    ///
    /// An empty body parses to an empty response, not an error. A line
    /// without a colon, or whose count is non-numeric after
    /// comma-stripping, is a [`Error::BadLine`].
    pub fn parse(prefix: &str, body: &str) -> Result<Self, Error> {
        let mut by_suffix = HashMap::new();
        for line in body.lines() {
            if line.is_empty() {
                continue;
            }
            let bad_line = || Error::BadLine {
                prefix: prefix.to_string(),
                line: line.to_string(),
            };
            let (suffix, count) = line.split_once(':').ok_or_else(bad_line)?;
            let count: u64 = count.replace(',', "").parse().map_err(|_| bad_line())?;
            by_suffix.insert(suffix.to_string(), count);
        }
        Ok(Self { by_suffix })
    }

    /// Breach count recorded for `suffix`, or 0 if the suffix is absent.
    pub fn count_for(&self, suffix: &str) -> u64 {
        self.by_suffix.get(suffix).copied().unwrap_or(0)
    }

    /// Number of suffixes in the response, padding entries included.
    pub fn len(&self) -> usize {
        self.by_suffix.len()
    }

    /// Whether the response contained no suffixes at all.
    pub fn is_empty(&self) -> bool {
        self.by_suffix.is_empty()
    }
}
