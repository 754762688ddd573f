//! Public API traits of the user-settings module.

use async_trait::async_trait;

use crate::errors::UserSettingsError;
use crate::models::{ModeValue, SettingsDocument, SettingsPatch, User};

/// Settings operations for in-process consumers.
///
/// ```ignore
/// let client: Arc<dyn UserSettingsApi> = module.client();
/// let settings = client
///     .set_notification_setting("42", "email", "daily", ModeValue::disabled())
///     .await?;
/// ```
#[async_trait]
pub trait UserSettingsApi: Send + Sync {
    /// Get settings of a user. Users that never wrote settings get the defaults.
    async fn get_settings(&self, user_id: &str) -> Result<SettingsDocument, UserSettingsError>;

    /// Replace the settings document, merged on top of defaults according to
    /// the configured merge policy.
    async fn replace_settings(
        &self,
        user_id: &str,
        patch: SettingsPatch,
    ) -> Result<SettingsDocument, UserSettingsError>;

    /// Set one `notifications[channel][mode]` value, keeping every other field.
    async fn set_notification_setting(
        &self,
        user_id: &str,
        channel: &str,
        mode: &str,
        value: ModeValue,
    ) -> Result<SettingsDocument, UserSettingsError>;
}

/// Read-only user directory lookups.
#[async_trait]
pub trait UsersDirectoryApi: Send + Sync {
    async fn list_users(&self, filter: Option<&str>) -> Result<Vec<User>, UserSettingsError>;

    async fn get_user(&self, id: u64) -> Result<User, UserSettingsError>;
}
