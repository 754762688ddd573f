use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::api::rest::routes;
use crate::config::{StorageConfig, UserSettingsConfig};
use crate::domain::repo::SettingsRepository;
use crate::domain::service::{ServiceConfig, SettingsService};
use crate::domain::store::SettingsStore;
use crate::domain::users::UsersService;
use crate::infra::storage::file_repo::FileSettingsRepository;
use crate::infra::storage::memory_repo::InMemorySettingsRepository;
use crate::infra::storage::users_memory_repo::InMemoryUsersRepository;
use crate::local_client::LocalClient;

/// Wired-up user-settings module: store, services and REST routes.
#[derive(Clone)]
pub struct UserSettingsModule {
    settings: Arc<SettingsService>,
    users: Arc<UsersService>,
}

impl UserSettingsModule {
    /// Builds the storage backend selected by `config` and the services on top.
    ///
    /// # Errors
    /// Fails when the file backend cannot load its snapshot.
    pub async fn init(config: &UserSettingsConfig) -> anyhow::Result<Self> {
        info!("Initializing user-settings module");

        let repo: Arc<dyn SettingsRepository> = match &config.storage {
            StorageConfig::Memory => Arc::new(InMemorySettingsRepository::new()),
            StorageConfig::File { path } => Arc::new(FileSettingsRepository::open(path).await?),
        };
        let store = SettingsStore::new(repo, config.merge_policy);
        let settings = Arc::new(SettingsService::new(store, ServiceConfig::from(config)));
        let users = Arc::new(UsersService::new(Arc::new(InMemoryUsersRepository::seeded())));

        info!(
            merge_policy = ?config.merge_policy,
            storage = ?config.storage,
            "User-settings module initialized"
        );
        Ok(Self { settings, users })
    }

    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        info!("Registering user-settings REST routes");
        routes::register_routes(router, self.settings.clone(), self.users.clone())
    }

    #[must_use]
    pub fn settings_service(&self) -> Arc<SettingsService> {
        self.settings.clone()
    }

    #[must_use]
    pub fn client(&self) -> Arc<LocalClient> {
        Arc::new(LocalClient::new(self.settings.clone(), self.users.clone()))
    }
}
