//! Checks passwords against the [Pwned Passwords](https://haveibeenpwned.com/Passwords)
//! breach database using the k-anonymity range API.
//!
//! Only the first 5 hex characters of a password's SHA-1 hash are ever sent
//! over the network. The service answers with every known hash suffix in
//! that range and the full comparison happens locally, so neither the
//! password nor its complete hash leaves the process.
//!
//! Clients are constructed explicitly from a [`PwnedConfig`]; there is no
//! process-global default client. The asynchronous [`PwnedPasswords`] and
//! the synchronous [`blocking::PwnedPasswords`] share the same hashing and
//! parsing core and talk to the same wire contract. [`CachedPwnedPasswords`]
//! adds a TTL cache of parsed ranges keyed by hash prefix.
//!
//! # Example
//!
//! ```no_run
//! use pwned_passwords::PwnedPasswords;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pwned_passwords::Error> {
//!     let client = PwnedPasswords::default();
//!     let count = client.check_password("hunter2").await?;
//!     if count > 0 {
//!         println!("seen in {count} breaches, pick something else");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! A failure to reach the service is always surfaced as an [`Error`], never
//! silently reported as "not breached"; callers own the fallback policy.

pub mod blocking;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod response;

pub use cache::{CacheConfig, CachedPwnedPasswords};
pub use client::PwnedPasswords;
pub use config::PwnedConfig;
pub use error::Error;
pub use response::RangeResponse;

/// Length of the hash prefix sent to the range API (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// SHA-1 hash a password and return the 40-character uppercase hex digest.
pub fn hash_password(password: &str) -> String {
    use sha1::{Digest, Sha1};
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    hex::encode_upper(hasher.finalize())
}

/// Split a 40-character SHA-1 hex digest into the 5-character prefix sent
/// to the API and the 35-character suffix compared locally.
pub fn split_hash(hash: &str) -> (&str, &str) {
    hash.split_at(PREFIX_LEN)
}
