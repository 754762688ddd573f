#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end REST flows against a fully initialised module.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt as _;
use user_settings::{StorageConfig, UserSettingsConfig, UserSettingsModule};

async fn app(config: UserSettingsConfig) -> Router {
    UserSettingsModule::init(&config)
        .await
        .unwrap()
        .register_rest(Router::new())
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn notification_then_replace_flow() {
    let app = app(UserSettingsConfig::default()).await;

    let (status, _) = call(
        &app,
        "PATCH",
        "/users/1/settings/notifications",
        Some(json!({
            "notificationType": "email",
            "notificationMode": "weekly",
            "notificationModeValue": "enabled"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, json) = call(&app, "GET", "/users/1/settings", None).await;
    assert_eq!(json["data"]["notifications"]["email"]["weekly"], "enabled");
    assert_eq!(json["data"]["notifications"]["email"]["daily"], "enabled");

    let (status, json) = call(
        &app,
        "POST",
        "/users/1/settings",
        Some(json!({ "displayDark": true })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(json["data"]["notifications"]["email"].get("weekly").is_none());
}

#[tokio::test]
async fn replace_validation_lists_every_field() {
    let app = app(UserSettingsConfig::default()).await;

    let (status, json) = call(
        &app,
        "POST",
        "/users/1/settings",
        Some(json!({
            "displayDark": "on",
            "notifications": { "sms": {} },
            "language": "en"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 3);
}

#[tokio::test]
async fn file_backend_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = UserSettingsConfig {
        storage: StorageConfig::File {
            path: dir.path().join("settings.json"),
        },
        ..UserSettingsConfig::default()
    };

    let first = app(config.clone()).await;
    call(
        &first,
        "POST",
        "/users/alice/settings",
        Some(json!({ "displayDark": true })),
    )
    .await;
    drop(first);

    let second = app(config).await;
    let (status, json) = call(&second, "GET", "/users/alice/settings", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["displayDark"], true);
}

#[tokio::test]
async fn health_and_directory_endpoints() {
    let app = app(UserSettingsConfig::default()).await;

    let (status, json) = call(&app, "GET", "/health-check", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Service is healthy");

    let (status, json) = call(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Users found");
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let (status, json) = call(&app, "GET", "/users?filter=nobody", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "No Users found");
}
