use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use user_settings_sdk::models::SettingsDocument;

use super::record::{SNAPSHOT_VERSION, SettingsRecord, SnapshotRecord};
use crate::domain::repo::{DocumentUpdate, SettingsRepository};

/// Settings backend persisted as a single JSON snapshot.
///
/// All operations share one lock. The snapshot is rewritten (temp file, then
/// rename) inside the critical section, and the in-memory view keeps its
/// previous value when the write fails.
pub struct FileSettingsRepository {
    path: PathBuf,
    documents: Mutex<BTreeMap<String, SettingsDocument>>,
}

impl FileSettingsRepository {
    /// Loads the snapshot at `path`. A missing file is an empty store.
    ///
    /// # Errors
    /// Fails on an unreadable or malformed snapshot.
    pub async fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let documents = load_snapshot(&path).await?;
        info!(path = %path.display(), users = documents.len(), "Loaded settings snapshot");
        Ok(Self {
            path,
            documents: Mutex::new(documents),
        })
    }

    async fn persist(&self, documents: &BTreeMap<String, SettingsDocument>) -> anyhow::Result<()> {
        let snapshot = SnapshotRecord {
            version: SNAPSHOT_VERSION,
            users: documents
                .iter()
                .map(|(user_id, doc)| (user_id.clone(), SettingsRecord::from(doc.clone())))
                .collect(),
        };
        let payload =
            serde_json::to_vec_pretty(&snapshot).context("failed to encode settings snapshot")?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, payload)
            .await
            .with_context(|| format!("failed to write {}", temp_path.display()))?;

        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&temp_path).await {
                warn!(error = %cleanup, path = %temp_path.display(), "Failed to remove temp snapshot");
            }
            return Err(e).with_context(|| format!("failed to replace {}", self.path.display()));
        }
        Ok(())
    }
}

async fn load_snapshot(path: &Path) -> anyhow::Result<BTreeMap<String, SettingsDocument>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No settings snapshot yet");
            return Ok(BTreeMap::new());
        }
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", path.display())),
    };

    let snapshot: SnapshotRecord = serde_json::from_slice(&bytes)
        .with_context(|| format!("malformed settings snapshot {}", path.display()))?;
    if snapshot.version != SNAPSHOT_VERSION {
        anyhow::bail!(
            "unsupported settings snapshot version {} in {} (expected {SNAPSHOT_VERSION})",
            snapshot.version,
            path.display()
        );
    }

    snapshot
        .users
        .into_iter()
        .map(|(user_id, record)| -> anyhow::Result<(String, SettingsDocument)> {
            let doc = SettingsDocument::try_from(record)
                .with_context(|| format!("invalid settings for user '{user_id}'"))?;
            Ok((user_id, doc))
        })
        .collect()
}

#[async_trait]
impl SettingsRepository for FileSettingsRepository {
    async fn find(&self, user_id: &str) -> anyhow::Result<Option<SettingsDocument>> {
        Ok(self.documents.lock().await.get(user_id).cloned())
    }

    async fn modify(
        &self,
        user_id: &str,
        update: DocumentUpdate,
    ) -> anyhow::Result<SettingsDocument> {
        let mut documents = self.documents.lock().await;
        let previous = documents.get(user_id).cloned();
        let updated = update(previous.clone());
        documents.insert(user_id.to_owned(), updated.clone());

        if let Err(e) = self.persist(&documents).await {
            match previous {
                Some(previous) => documents.insert(user_id.to_owned(), previous),
                None => documents.remove(user_id),
            };
            return Err(e);
        }
        Ok(updated)
    }
}
