//! Password validation backed by the breach database.

use tracing::warn;

use pwned_passwords::PwnedPasswords;

use crate::fallback::is_common_password;

const DEFAULT_PWNED_MESSAGE: &str = "This password is too common.";
const DEFAULT_HELP_MESSAGE: &str = "Your password can't be a commonly used password.";

/// Rejection returned by [`PwnedPasswordsValidator::validate`].
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct PasswordRejected {
    /// User-facing message.
    pub message: String,
    /// How many breaches the password was seen in, when the breach API
    /// answered. `None` when the rejection came from the fallback list.
    pub times_seen: Option<u64>,
}

/// Validator that rejects passwords found in the breach database.
///
/// When the database is unreachable it falls back to the embedded
/// common-password list instead of accepting the password unchecked; the
/// failure is logged at warn level.
#[derive(Debug, Clone)]
pub struct PwnedPasswordsValidator {
    client: PwnedPasswords,
    error_message: String,
    help_message: String,
}

impl PwnedPasswordsValidator {
    /// Validator with the default messages.
    pub fn new(client: PwnedPasswords) -> Self {
        Self {
            client,
            error_message: DEFAULT_PWNED_MESSAGE.to_string(),
            help_message: DEFAULT_HELP_MESSAGE.to_string(),
        }
    }

    /// Override the rejection message shown to users.
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Override the help text.
    pub fn with_help_message(mut self, message: impl Into<String>) -> Self {
        self.help_message = message.into();
        self
    }

    /// Help text suitable for display next to a password form field.
    pub fn help_text(&self) -> &str {
        &self.help_message
    }

    /// Validate a candidate password.
    pub async fn validate(&self, password: &str) -> Result<(), PasswordRejected> {
        match self.client.check_password(password).await {
            Ok(0) => Ok(()),
            Ok(times_seen) => Err(PasswordRejected {
                message: self.error_message.clone(),
                times_seen: Some(times_seen),
            }),
            Err(err) => {
                warn!(
                    error = %err,
                    "Pwned Passwords unavailable, falling back to common-password list"
                );
                if is_common_password(password) {
                    Err(PasswordRejected {
                        message: self.error_message.clone(),
                        times_seen: None,
                    })
                } else {
                    Ok(())
                }
            }
        }
    }
}
