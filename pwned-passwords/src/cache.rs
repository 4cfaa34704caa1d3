//! Prefix-keyed TTL cache over the asynchronous client.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::PwnedPasswords;
use crate::error::Error;
use crate::response::RangeResponse;
use crate::{hash_password, split_hash};

/// Cache tuning for [`CachedPwnedPasswords`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a fetched range stays valid, in seconds.
    #[serde(default = "default_ttl")]
    pub time_to_live_seconds: u64,
    /// Maximum number of ranges kept at once.
    #[serde(default = "default_max_ranges")]
    pub max_ranges: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            time_to_live_seconds: default_ttl(),
            max_ranges: default_max_ranges(),
        }
    }
}

fn default_ttl() -> u64 {
    3600
}

fn default_max_ranges() -> u64 {
    1024
}

/// Async client wrapper that memoizes parsed ranges per hash prefix.
///
/// Each of the 16^5 possible prefixes occupies its own entry, so checks
/// for passwords with different prefixes never alias. Failed fetches are
/// not cached; the next check for that prefix goes back to the network.
#[derive(Debug, Clone)]
pub struct CachedPwnedPasswords {
    inner: PwnedPasswords,
    ranges: Cache<String, Arc<RangeResponse>>,
}

impl CachedPwnedPasswords {
    /// Wrap a client with a range cache.
    pub fn new(inner: PwnedPasswords, config: &CacheConfig) -> Self {
        let ranges = Cache::builder()
            .max_capacity(config.max_ranges)
            .time_to_live(Duration::from_secs(config.time_to_live_seconds))
            .build();
        Self { inner, ranges }
    }

    /// Check a password, consulting the cache before the network.
    pub async fn check_password(&self, password: &str) -> Result<u64, Error> {
        let hash = hash_password(password);
        let (prefix, suffix) = split_hash(&hash);
        Ok(self.range(prefix).await?.count_for(suffix))
    }

    /// Cached range lookup.
    ///
    /// Concurrent misses for the same prefix may each hit the network;
    /// whichever response lands last stays cached, which is harmless since
    /// the responses are equivalent.
    pub async fn range(&self, prefix: &str) -> Result<Arc<RangeResponse>, Error> {
        if let Some(range) = self.ranges.get(prefix).await {
            debug!(prefix, "range cache hit");
            return Ok(range);
        }
        let range = Arc::new(self.inner.range(prefix).await?);
        self.ranges
            .insert(prefix.to_string(), Arc::clone(&range))
            .await;
        Ok(range)
    }
}
