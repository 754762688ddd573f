use std::sync::Arc;

use async_trait::async_trait;
use user_settings_sdk::{
    ModeValue, SettingsDocument, SettingsPatch, User, UserSettingsApi, UserSettingsError,
    UsersDirectoryApi,
};

use crate::domain::service::SettingsService;
use crate::domain::users::UsersService;

/// In-process client over the module's services.
pub struct LocalClient {
    settings: Arc<SettingsService>,
    users: Arc<UsersService>,
}

impl LocalClient {
    #[must_use]
    pub fn new(settings: Arc<SettingsService>, users: Arc<UsersService>) -> Self {
        Self { settings, users }
    }
}

#[async_trait]
impl UserSettingsApi for LocalClient {
    async fn get_settings(&self, user_id: &str) -> Result<SettingsDocument, UserSettingsError> {
        self.settings.get_user_settings(user_id).await.into_result()
    }

    async fn replace_settings(
        &self,
        user_id: &str,
        patch: SettingsPatch,
    ) -> Result<SettingsDocument, UserSettingsError> {
        self.settings
            .replace_user_settings(user_id, patch)
            .await
            .into_result()
    }

    async fn set_notification_setting(
        &self,
        user_id: &str,
        channel: &str,
        mode: &str,
        value: ModeValue,
    ) -> Result<SettingsDocument, UserSettingsError> {
        self.settings
            .set_notification_setting(user_id, channel, mode, value)
            .await
            .into_result()
    }
}

#[async_trait]
impl UsersDirectoryApi for LocalClient {
    async fn list_users(&self, filter: Option<&str>) -> Result<Vec<User>, UserSettingsError> {
        self.users.find_all(filter).await.into_result()
    }

    async fn get_user(&self, id: u64) -> Result<User, UserSettingsError> {
        self.users.find_by_id(id).await.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UserSettingsConfig, UserSettingsModule};
    use user_settings_sdk::NotificationChannel;

    async fn client() -> Arc<LocalClient> {
        UserSettingsModule::init(&UserSettingsConfig::default())
            .await
            .unwrap()
            .client()
    }

    #[tokio::test]
    async fn test_client_round_trip() {
        let client = client().await;

        let updated = client
            .set_notification_setting("42", "email", "daily", ModeValue::disabled())
            .await
            .unwrap();
        let read = client.get_settings("42").await.unwrap();

        assert_eq!(updated, read);
        assert_eq!(
            read.notifications.get(NotificationChannel::Email, "daily"),
            Some(&ModeValue::disabled())
        );
    }

    #[tokio::test]
    async fn test_client_maps_validation_error() {
        let client = client().await;

        let err = client
            .set_notification_setting("42", "sms", "daily", ModeValue::enabled())
            .await
            .unwrap_err();

        match err {
            UserSettingsError::Validation { violations, .. } => {
                assert_eq!(violations[0].field, "notificationType");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_client_maps_not_found() {
        let client = client().await;

        let err = client.get_user(999).await.unwrap_err();

        assert_eq!(err, UserSettingsError::not_found("User not found"));
    }
}
