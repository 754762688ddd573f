use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use user_settings_sdk::response::{FieldViolation, ServiceResponse};

use super::dto::ServiceResponseDto;

/// Envelopes are answered with their own `statusCode`.
impl<T: Serialize> IntoResponse for ServiceResponseDto<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// 400 envelope for input rejected before it reaches a service.
pub fn rejected<T>(field: &str, message: impl Into<String>) -> ServiceResponseDto<T> {
    ServiceResponse::<T>::validation_error(
        format!("Invalid input: {field}"),
        vec![FieldViolation::new(field, message)],
    )
    .into()
}
