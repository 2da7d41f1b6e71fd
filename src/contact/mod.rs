//! Contact form submission.
//!
//! The form hands a validated [`ContactPayload`] to a [`ContactRelay`]. The
//! only relay shipped talks to an EmailJS-compatible HTTP API; tests plug in
//! their own.

pub mod relay;

use serde::Serialize;
use thiserror::Error;

pub use relay::{ContactRelay, EmailJsRelay, RelayError};

/// Field names match the email template variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

impl ContactPayload {
    pub fn new(from_name: &str, reply_to: &str, message: &str) -> Self {
        Self {
            from_name: from_name.trim().to_string(),
            reply_to: reply_to.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.from_name.is_empty() {
            return Err(FormError::Missing("Name"));
        }
        if self.reply_to.is_empty() {
            return Err(FormError::Missing("Email"));
        }
        if !looks_like_email(&self.reply_to) {
            return Err(FormError::InvalidEmail(self.reply_to.clone()));
        }
        if self.message.is_empty() {
            return Err(FormError::Missing("Message"));
        }
        Ok(())
    }
}

/// Same shape check a browser applies to `type="email"` inputs: one `@`,
/// a non-empty local part, and a dotted domain without spaces.
fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}
