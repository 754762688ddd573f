use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, Query};
use serde_json::Value;
use tracing::debug;
use user_settings_sdk::response::ServiceResponse;

use super::dto::{ServiceResponseDto, SettingsDocumentDto, UserDto, UsersQuery};
use super::response::rejected;
use crate::domain::fields::SettingsFields;
use crate::domain::service::SettingsService;
use crate::domain::users::UsersService;

type JsonBody = Result<Json<Value>, JsonRejection>;

fn malformed_body<T>(rejection: &JsonRejection) -> ServiceResponseDto<T> {
    debug!(error = %rejection, "Rejected request body");
    rejected(SettingsFields::BODY, rejection.body_text())
}

#[allow(clippy::unused_async)]
pub async fn health_check() -> ServiceResponseDto<()> {
    ServiceResponse::success("Service is healthy", ()).into()
}

pub async fn list_users(
    Extension(svc): Extension<Arc<UsersService>>,
    Query(query): Query<UsersQuery>,
) -> ServiceResponseDto<Vec<UserDto>> {
    svc.find_all(query.filter.as_deref())
        .await
        .map(|users| users.into_iter().map(UserDto::from).collect::<Vec<_>>())
        .into()
}

pub async fn get_user(
    Extension(svc): Extension<Arc<UsersService>>,
    Path(id): Path<String>,
) -> ServiceResponseDto<UserDto> {
    let Ok(id) = id.parse::<u64>() else {
        return rejected(SettingsFields::USER_ID, "must be a non-negative integer");
    };
    svc.find_by_id(id).await.into()
}

pub async fn get_settings(
    Extension(svc): Extension<Arc<SettingsService>>,
    Path(user_id): Path<String>,
) -> ServiceResponseDto<SettingsDocumentDto> {
    svc.get_user_settings(&user_id).await.into()
}

pub async fn replace_settings(
    Extension(svc): Extension<Arc<SettingsService>>,
    Path(user_id): Path<String>,
    body: JsonBody,
) -> ServiceResponseDto<SettingsDocumentDto> {
    match body {
        Ok(Json(body)) => svc.replace_user_settings_json(&user_id, &body).await.into(),
        Err(rejection) => malformed_body(&rejection),
    }
}

pub async fn set_notification_setting(
    Extension(svc): Extension<Arc<SettingsService>>,
    Path(user_id): Path<String>,
    body: JsonBody,
) -> ServiceResponseDto<SettingsDocumentDto> {
    match body {
        Ok(Json(body)) => svc
            .set_notification_setting_json(&user_id, &body)
            .await
            .into(),
        Err(rejection) => malformed_body(&rejection),
    }
}
