use user_settings_sdk::errors::UserSettingsError;
use user_settings_sdk::response::{FieldViolation, ServiceResponse};

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("Validation failed on {}", joined_fields(.violations))]
    Validation { violations: Vec<FieldViolation> },

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

fn joined_fields(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            violations: vec![FieldViolation::new(field, message)],
        }
    }

    /// Converts the error into a failure envelope.
    ///
    /// Storage failures are logged with full detail here and surfaced only as
    /// `failure_message`.
    pub fn into_response<T>(self, failure_message: &str) -> ServiceResponse<T> {
        match self {
            Self::NotFound { message } => ServiceResponse::not_found(message),
            Self::Validation { violations } => {
                let message = format!("Invalid input: {}", joined_fields(&violations));
                tracing::debug!(%message, "Rejected invalid input");
                ServiceResponse::validation_error(message, violations)
            }
            Self::Storage(e) => {
                tracing::error!(error = ?e, "{failure_message}");
                ServiceResponse::internal_error(failure_message)
            }
        }
    }
}

impl From<DomainError> for UserSettingsError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { violations } => {
                Self::validation(format!("Invalid input: {}", joined_fields(&violations)), violations)
            }
            DomainError::Storage(_) => Self::internal(),
        }
    }
}
