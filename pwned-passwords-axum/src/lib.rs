//! Breached-password protection for axum applications.
//!
//! Two integration points over the [`pwned_passwords`] client:
//!
//! - [`pwned_passwords_middleware`] scans form POSTs for password-like
//!   fields and records, per request, which of them hold breached values.
//! - [`PwnedPasswordsValidator`] rejects breached passwords at signup or
//!   password-change time.
//!
//! Both fall back to an embedded common-password list when the breach API
//! cannot be reached, instead of waving passwords through unchecked.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use axum::{Extension, Router, middleware::from_fn_with_state, routing::post};
//! use pwned_passwords::PwnedPasswords;
//! use pwned_passwords_axum::{CompromisedFields, PasswordScan, pwned_passwords_middleware};
//!
//! async fn signup(Extension(pwned): Extension<CompromisedFields>) -> &'static str {
//!     if !pwned.0.is_empty() {
//!         return "that password appears in known breaches";
//!     }
//!     "welcome"
//! }
//!
//! let scan = Arc::new(PasswordScan::new(PwnedPasswords::default()));
//! let app: Router = Router::new()
//!     .route("/signup", post(signup))
//!     .layer(from_fn_with_state(scan, pwned_passwords_middleware));
//! ```

pub mod fallback;
pub mod middleware;
pub mod validator;

pub use middleware::{CompromisedFields, PasswordScan, pwned_passwords_middleware};
pub use validator::{PasswordRejected, PwnedPasswordsValidator};
