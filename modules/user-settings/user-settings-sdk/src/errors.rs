//! Error types for the user-settings SDK.

use thiserror::Error;

use crate::response::FieldViolation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserSettingsError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        violations: Vec<FieldViolation>,
    },

    #[error("Internal error")]
    Internal,
}

impl UserSettingsError {
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>, violations: Vec<FieldViolation>) -> Self {
        Self::Validation {
            message: message.into(),
            violations,
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
