//! Request-scanning middleware.
//!
//! Inspects `POST` form submissions for fields that look like passwords
//! and records which of them hold values found in the breach database, so
//! downstream handlers can warn the user or reject the submission.

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use regex::{Regex, RegexBuilder};
use tracing::error;

use pwned_passwords::PwnedPasswords;

use crate::fallback::is_common_password;

/// Upper bound on how much of a request body the scanner will buffer.
const MAX_SCAN_BODY: usize = 1024 * 1024;

/// Default pattern for recognizing password fields by name. Matches
/// `password`, `passphrase`, `new_password1`, and the like.
const DEFAULT_FIELD_PATTERN: &str = "PASS";

/// Names of submitted form fields whose values were found in the breach
/// database, inserted into request extensions by
/// [`pwned_passwords_middleware`].
///
/// Empty when the request was not a form POST, when no field name looked
/// like a password, or when no candidate value was breached.
#[derive(Debug, Clone, Default)]
pub struct CompromisedFields(pub Vec<String>);

/// Field-name pattern and breach client shared across requests.
#[derive(Debug, Clone)]
pub struct PasswordScan {
    client: PwnedPasswords,
    field_pattern: Regex,
}

impl PasswordScan {
    /// Scanner using the default case-insensitive `PASS` field pattern.
    pub fn new(client: PwnedPasswords) -> Self {
        let field_pattern = RegexBuilder::new(DEFAULT_FIELD_PATTERN)
            .case_insensitive(true)
            .build()
            .expect("default field pattern is a valid regex");
        Self {
            client,
            field_pattern,
        }
    }

    /// Scanner with a custom field-name pattern, matched case-insensitively
    /// against each form field's name.
    pub fn with_field_pattern(
        client: PwnedPasswords,
        pattern: &str,
    ) -> Result<Self, regex::Error> {
        let field_pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            client,
            field_pattern,
        })
    }

    /// Scan a urlencoded form body, returning the names of candidate
    /// fields whose values are breached.
    ///
    /// If the breach API fails mid-scan, every candidate field is instead
    /// checked against the embedded common-password list.
    async fn scan_form(&self, body: &[u8]) -> Vec<String> {
        let fields: Vec<(String, String)> = match serde_urlencoded::from_bytes(body) {
            Ok(fields) => fields,
            Err(_) => return Vec::new(),
        };

        let candidates: Vec<(&str, &str)> = fields
            .iter()
            .filter(|(name, _)| self.field_pattern.is_match(name))
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        if candidates.is_empty() {
            return Vec::new();
        }

        let mut compromised = Vec::new();
        for &(name, value) in &candidates {
            match self.client.check_password(value).await {
                Ok(0) => {}
                Ok(_) => compromised.push(name.to_string()),
                Err(err) => {
                    error!(
                        error = %err,
                        "Pwned Passwords unavailable, falling back to common-password list"
                    );
                    return candidates
                        .iter()
                        .filter(|(_, value)| is_common_password(value))
                        .map(|(name, _)| name.to_string())
                        .collect();
                }
            }
        }
        compromised
    }
}

/// Middleware that scans form POSTs for breached passwords.
///
/// Attach with [`axum::middleware::from_fn_with_state`], passing an
/// `Arc<PasswordScan>` as the state. Every request that reaches the inner
/// service carries a [`CompromisedFields`] extension; for
/// `application/x-www-form-urlencoded` POST bodies it lists the fields
/// whose names match the scanner's pattern and whose values appear in the
/// breach database. Other requests get an empty list without any API
/// traffic.
pub async fn pwned_passwords_middleware(
    State(scan): State<Arc<PasswordScan>>,
    mut request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::POST || !is_form_content_type(&request) {
        request.extensions_mut().insert(CompromisedFields::default());
        return next.run(request).await;
    }

    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, MAX_SCAN_BODY).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    let compromised = scan.scan_form(&bytes).await;

    let mut request = Request::from_parts(parts, Body::from(bytes));
    request
        .extensions_mut()
        .insert(CompromisedFields(compromised));
    next.run(request).await
}

fn is_form_content_type(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}
