use std::sync::Arc;

use user_settings_sdk::models::{NotificationChange, SettingsDocument, SettingsPatch};

use super::merge::{self, MergePolicy};
use super::repo::SettingsRepository;

/// Keyed settings documents with default fallback and merge-on-write.
///
/// Operations are total over their inputs; the only failures are those of
/// the storage backend underneath.
#[derive(Clone)]
pub struct SettingsStore {
    repo: Arc<dyn SettingsRepository>,
    policy: MergePolicy,
}

impl SettingsStore {
    #[must_use]
    pub fn new(repo: Arc<dyn SettingsRepository>, policy: MergePolicy) -> Self {
        Self { repo, policy }
    }

    #[must_use]
    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Stored document, or the defaults when the user has none. Never writes.
    ///
    /// # Errors
    /// Propagates storage backend failures.
    pub async fn get(&self, user_id: &str) -> anyhow::Result<SettingsDocument> {
        Ok(self.repo.find(user_id).await?.unwrap_or_default())
    }

    /// Stores `patch` merged according to the store's policy and returns the
    /// merged document.
    ///
    /// # Errors
    /// Propagates storage backend failures.
    pub async fn put(&self, user_id: &str, patch: SettingsPatch) -> anyhow::Result<SettingsDocument> {
        let policy = self.policy;
        self.repo
            .modify(user_id, Box::new(move |current| policy.apply(current, patch)))
            .await
    }

    /// Deep-sets `notifications[channel][mode]` and stores the whole document.
    ///
    /// # Errors
    /// Propagates storage backend failures.
    pub async fn set_field(
        &self,
        user_id: &str,
        change: NotificationChange,
    ) -> anyhow::Result<SettingsDocument> {
        self.repo
            .modify(
                user_id,
                Box::new(move |current| merge::apply_change(current, change)),
            )
            .await
    }
}
