//! Success/failure envelope returned by every service operation.

use crate::errors::UserSettingsError;

/// Outcome classification of a service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    NotFound,
    ValidationError,
    InternalError,
}

impl ResponseStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NotFound => "not-found",
            Self::ValidationError => "validation-error",
            Self::InternalError => "internal-error",
        }
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Dotted field path, e.g. `notificationType` or `notifications.email.daily`.
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Tagged success/failure wrapper.
///
/// `status_code` is the transport-level code the HTTP layer should answer
/// with: 200/201 for success, 404, 400 and 500 for the failure classes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ServiceResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub status: ResponseStatus,
    pub status_code: u16,
    pub errors: Vec<FieldViolation>,
}

impl<T> ServiceResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::ok_with_code(message, data, 200)
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::ok_with_code(message, data, 201)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failure(ResponseStatus::NotFound, 404, message, Vec::new())
    }

    pub fn validation_error(message: impl Into<String>, errors: Vec<FieldViolation>) -> Self {
        Self::failure(ResponseStatus::ValidationError, 400, message, errors)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::failure(ResponseStatus::InternalError, 500, message, Vec::new())
    }

    fn ok_with_code(message: impl Into<String>, data: T, status_code: u16) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            status: ResponseStatus::Ok,
            status_code,
            errors: Vec::new(),
        }
    }

    fn failure(
        status: ResponseStatus,
        status_code: u16,
        message: impl Into<String>,
        errors: Vec<FieldViolation>,
    ) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            status,
            status_code,
            errors,
        }
    }

    /// Converts the payload, keeping message and classification.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ServiceResponse<U> {
        ServiceResponse {
            success: self.success,
            message: self.message,
            data: self.data.map(f),
            status: self.status,
            status_code: self.status_code,
            errors: self.errors,
        }
    }

    /// Unwraps the envelope into a plain `Result` for in-process consumers.
    ///
    /// # Errors
    /// Returns the failure class of the envelope as a [`UserSettingsError`].
    pub fn into_result(self) -> Result<T, UserSettingsError> {
        match (self.status, self.data) {
            (ResponseStatus::Ok, Some(data)) => Ok(data),
            (ResponseStatus::NotFound, _) => Err(UserSettingsError::not_found(self.message)),
            (ResponseStatus::ValidationError, _) => Err(UserSettingsError::validation(
                self.message,
                self.errors,
            )),
            (ResponseStatus::Ok | ResponseStatus::InternalError, _) => {
                Err(UserSettingsError::internal())
            }
        }
    }
}
