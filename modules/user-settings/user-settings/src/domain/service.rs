use serde_json::Value;
use tracing::{debug, info};
use user_settings_sdk::models::{ModeValue, NotificationChange, SettingsDocument, SettingsPatch};
use user_settings_sdk::response::ServiceResponse;

use super::error::DomainError;
use super::store::SettingsStore;
use super::validation::Validator;
use crate::config::UserSettingsConfig;

pub const SETTINGS_FOUND: &str = "User settings found";
pub const SETTINGS_UPDATED: &str = "User settings updated";
const FIND_FAILED: &str = "An error occurred while finding user settings.";
const UPDATE_FAILED: &str = "An error occurred while updating user settings.";

#[derive(Debug, Clone, Copy)]
pub struct ServiceConfig {
    pub max_mode_length: usize,
    pub max_value_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_mode_length: 64,
            max_value_length: 64,
        }
    }
}

impl From<&UserSettingsConfig> for ServiceConfig {
    fn from(cfg: &UserSettingsConfig) -> Self {
        Self {
            max_mode_length: cfg.max_mode_length,
            max_value_length: cfg.max_value_length,
        }
    }
}

/// Settings operations returning result envelopes.
///
/// Input is validated before the store is touched; a rejected request never
/// mutates anything.
pub struct SettingsService {
    store: SettingsStore,
    validator: Validator,
}

impl SettingsService {
    #[must_use]
    pub fn new(store: SettingsStore, config: ServiceConfig) -> Self {
        Self {
            store,
            validator: Validator::new(config.max_mode_length, config.max_value_length),
        }
    }

    pub async fn get_user_settings(&self, user_id: &str) -> ServiceResponse<SettingsDocument> {
        debug!(%user_id, "Getting user settings");
        match self.store.get(user_id).await {
            Ok(settings) => ServiceResponse::success(SETTINGS_FOUND, settings),
            Err(e) => DomainError::from(e).into_response(FIND_FAILED),
        }
    }

    /// Replaces the document with a typed patch, merged by the store's policy.
    pub async fn replace_user_settings(
        &self,
        user_id: &str,
        patch: SettingsPatch,
    ) -> ServiceResponse<SettingsDocument> {
        let patch = match self.validator.settings_patch(patch) {
            Ok(patch) => patch,
            Err(e) => return e.into_response(UPDATE_FAILED),
        };
        Self::updated(self.put(user_id, patch).await)
    }

    /// Same as [`Self::replace_user_settings`], for a body not yet narrowed.
    pub async fn replace_user_settings_json(
        &self,
        user_id: &str,
        body: &Value,
    ) -> ServiceResponse<SettingsDocument> {
        let patch = match self.validator.parse_settings_body(body) {
            Ok(patch) => patch,
            Err(e) => return e.into_response(UPDATE_FAILED),
        };
        Self::updated(self.put(user_id, patch).await)
    }

    pub async fn set_notification_setting(
        &self,
        user_id: &str,
        channel: &str,
        mode: &str,
        value: ModeValue,
    ) -> ServiceResponse<SettingsDocument> {
        let change = match self.validator.notification_change(channel, mode, value) {
            Ok(change) => change,
            Err(e) => return e.into_response(UPDATE_FAILED),
        };
        Self::updated(self.set_field(user_id, change).await)
    }

    pub async fn set_notification_setting_json(
        &self,
        user_id: &str,
        body: &Value,
    ) -> ServiceResponse<SettingsDocument> {
        let change = match self.validator.parse_notification_body(body) {
            Ok(change) => change,
            Err(e) => return e.into_response(UPDATE_FAILED),
        };
        Self::updated(self.set_field(user_id, change).await)
    }

    async fn put(
        &self,
        user_id: &str,
        patch: SettingsPatch,
    ) -> Result<SettingsDocument, DomainError> {
        debug!(%user_id, policy = ?self.store.policy(), "Replacing user settings");
        let settings = self.store.put(user_id, patch).await?;
        info!(%user_id, "Replaced user settings");
        Ok(settings)
    }

    async fn set_field(
        &self,
        user_id: &str,
        change: NotificationChange,
    ) -> Result<SettingsDocument, DomainError> {
        debug!(
            %user_id,
            channel = %change.channel,
            mode = %change.mode,
            "Setting notification value"
        );
        let settings = self.store.set_field(user_id, change).await?;
        Ok(settings)
    }

    fn updated(result: Result<SettingsDocument, DomainError>) -> ServiceResponse<SettingsDocument> {
        match result {
            Ok(settings) => ServiceResponse::created(SETTINGS_UPDATED, settings),
            Err(e) => e.into_response(UPDATE_FAILED),
        }
    }
}
