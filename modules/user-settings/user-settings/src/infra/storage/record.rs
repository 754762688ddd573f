//! On-disk shape of the settings snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub version: u32,
    #[serde(default)]
    pub users: BTreeMap<String, SettingsRecord>,
}

impl Default for SnapshotRecord {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            users: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    pub display_dark: bool,
    #[serde(default)]
    pub notifications: BTreeMap<String, BTreeMap<String, ModeValueRecord>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModeValueRecord {
    Flag(bool),
    Token(String),
}
