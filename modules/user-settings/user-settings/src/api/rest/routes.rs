use std::sync::Arc;

use axum::routing::{get, patch};
use axum::{Extension, Router};

use super::handlers;
use crate::domain::service::SettingsService;
use crate::domain::users::UsersService;

/// Mounts the module's endpoints onto `router`.
pub fn register_routes(
    router: Router,
    settings: Arc<SettingsService>,
    users: Arc<UsersService>,
) -> Router {
    let module_routes = Router::new()
        .route("/health-check", get(handlers::health_check))
        .route("/users", get(handlers::list_users))
        .route("/users/{id}", get(handlers::get_user))
        .route(
            "/users/{id}/settings",
            get(handlers::get_settings).post(handlers::replace_settings),
        )
        .route(
            "/users/{id}/settings/notifications",
            patch(handlers::set_notification_setting),
        )
        .layer(Extension(settings))
        .layer(Extension(users));

    router.merge(module_routes)
}
