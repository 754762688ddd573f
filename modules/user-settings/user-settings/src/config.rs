//! Configuration for the user-settings module.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::merge::MergePolicy;

/// User-settings module configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserSettingsConfig {
    /// How a full-document replace is combined with defaults.
    pub merge_policy: MergePolicy,

    /// Longest accepted notification mode name.
    #[serde(default = "default_max_mode_length")]
    pub max_mode_length: usize,

    /// Longest accepted string token for a mode value.
    #[serde(default = "default_max_value_length")]
    pub max_value_length: usize,

    pub storage: StorageConfig,
}

/// Backend holding the settings documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StorageConfig {
    /// Process-lifetime map.
    #[default]
    Memory,
    /// JSON snapshot rewritten after every change.
    File { path: PathBuf },
}

fn default_max_mode_length() -> usize {
    64
}

fn default_max_value_length() -> usize {
    64
}

impl Default for UserSettingsConfig {
    fn default() -> Self {
        Self {
            merge_policy: MergePolicy::default(),
            max_mode_length: default_max_mode_length(),
            max_value_length: default_max_value_length(),
            storage: StorageConfig::default(),
        }
    }
}
