use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use user_settings_sdk::models::SettingsDocument;

use crate::domain::repo::{DocumentUpdate, SettingsRepository};

/// Process-lifetime settings backend.
///
/// Each `modify` runs under the shard lock of its key, so read-modify-write
/// cycles on one user serialize while different users proceed in parallel.
#[derive(Debug, Default)]
pub struct InMemorySettingsRepository {
    documents: DashMap<String, SettingsDocument>,
}

impl InMemorySettingsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn find(&self, user_id: &str) -> anyhow::Result<Option<SettingsDocument>> {
        Ok(self.documents.get(user_id).map(|doc| doc.value().clone()))
    }

    async fn modify(
        &self,
        user_id: &str,
        update: DocumentUpdate,
    ) -> anyhow::Result<SettingsDocument> {
        let updated = match self.documents.entry(user_id.to_owned()) {
            Entry::Occupied(mut entry) => {
                let updated = update(Some(entry.get().clone()));
                entry.insert(updated.clone());
                updated
            }
            Entry::Vacant(entry) => {
                let updated = update(None);
                entry.insert(updated.clone());
                updated
            }
        };
        Ok(updated)
    }
}
