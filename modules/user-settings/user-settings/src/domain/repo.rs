use async_trait::async_trait;
use user_settings_sdk::models::SettingsDocument;

/// Read-modify-write step applied to a user's stored document
/// (`None` when the user has none yet).
pub type DocumentUpdate = Box<dyn FnOnce(Option<SettingsDocument>) -> SettingsDocument + Send>;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn find(&self, user_id: &str) -> anyhow::Result<Option<SettingsDocument>>;

    /// Applies `update` to the document stored at `user_id` and stores the
    /// result. The read and the write are atomic with respect to any other
    /// `modify` on the same key.
    async fn modify(
        &self,
        user_id: &str,
        update: DocumentUpdate,
    ) -> anyhow::Result<SettingsDocument>;
}
