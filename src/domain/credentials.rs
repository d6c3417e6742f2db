//! Inbound OAuth credentials.
//!
//! The user entity never serializes its secrets, but they still have to be
//! ingested (e.g. from an OAuth callback). This narrow shape carries only
//! the two secret fields.

use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[validate(length(min = 1, message = "accessToken is required"))]
    pub access_token: String,
    #[validate(length(min = 1, message = "accessSecret is required"))]
    pub access_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"[REDACTED]")
            .field("access_secret", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    pub fn new(access_token: impl Into<String>, access_secret: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            access_secret: access_secret.into(),
        }
    }

    /// Validate and return the credentials, mapping failures to
    /// `AppError::Validation`.
    pub fn validated(self) -> AppResult<Self> {
        self.validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;
        Ok(self)
    }
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}
