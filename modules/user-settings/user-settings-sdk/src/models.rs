//! Public models for the user-settings module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the module and its consumers. Wire shapes live in the REST DTOs
//! and storage records, never here.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};

/// Closed set of notification delivery channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NotificationChannel {
    Email,
    MobilePush,
}

impl NotificationChannel {
    pub const ALL: [Self; 2] = [Self::Email, Self::MobilePush];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::MobilePush => "mobilepush",
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown notification channel '{0}'")]
pub struct UnknownChannel(pub String);

impl FromStr for NotificationChannel {
    type Err = UnknownChannel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|channel| channel.as_str() == s)
            .ok_or_else(|| UnknownChannel(s.to_owned()))
    }
}

/// Value of a single notification mode: a string token or a boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeValue {
    Token(String),
    Flag(bool),
}

impl ModeValue {
    #[must_use]
    pub fn enabled() -> Self {
        Self::Token("enabled".to_owned())
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self::Token("disabled".to_owned())
    }
}

impl From<&str> for ModeValue {
    fn from(value: &str) -> Self {
        Self::Token(value.to_owned())
    }
}

impl From<String> for ModeValue {
    fn from(value: String) -> Self {
        Self::Token(value)
    }
}

impl From<bool> for ModeValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Mode name to value mapping of one channel.
pub type ModeMap = BTreeMap<String, ModeValue>;

/// Channel -> mode -> value matrix of notification preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationMatrix {
    channels: BTreeMap<NotificationChannel, ModeMap>,
}

impl NotificationMatrix {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`NotificationMatrix::set`].
    #[must_use]
    pub fn with(
        mut self,
        channel: NotificationChannel,
        mode: impl Into<String>,
        value: impl Into<ModeValue>,
    ) -> Self {
        self.set(channel, mode, value.into());
        self
    }

    /// Sets `channel.mode`, creating the channel entry when absent.
    /// Returns the previous value.
    pub fn set(
        &mut self,
        channel: NotificationChannel,
        mode: impl Into<String>,
        value: ModeValue,
    ) -> Option<ModeValue> {
        self.channels
            .entry(channel)
            .or_default()
            .insert(mode.into(), value)
    }

    #[must_use]
    pub fn get(&self, channel: NotificationChannel, mode: &str) -> Option<&ModeValue> {
        self.channels.get(&channel).and_then(|modes| modes.get(mode))
    }

    #[must_use]
    pub fn channel(&self, channel: NotificationChannel) -> Option<&ModeMap> {
        self.channels.get(&channel)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NotificationChannel, &ModeMap)> {
        self.channels.iter().map(|(channel, modes)| (*channel, modes))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl IntoIterator for NotificationMatrix {
    type Item = (NotificationChannel, ModeMap);
    type IntoIter = btree_map::IntoIter<NotificationChannel, ModeMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.channels.into_iter()
    }
}

impl FromIterator<(NotificationChannel, ModeMap)> for NotificationMatrix {
    fn from_iter<I: IntoIterator<Item = (NotificationChannel, ModeMap)>>(iter: I) -> Self {
        Self {
            channels: iter.into_iter().collect(),
        }
    }
}

/// Per-user settings record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDocument {
    pub display_dark: bool,
    pub notifications: NotificationMatrix,
}

/// Document served to users that never wrote their settings.
pub static DEFAULT_SETTINGS: LazyLock<SettingsDocument> = LazyLock::new(|| SettingsDocument {
    display_dark: false,
    notifications: NotificationMatrix::new()
        .with(NotificationChannel::Email, "daily", ModeValue::enabled())
        .with(NotificationChannel::MobilePush, "app_dm", ModeValue::disabled())
        .with(NotificationChannel::MobilePush, "app_ads", ModeValue::disabled()),
});

impl Default for SettingsDocument {
    /// Same as [`DEFAULT_SETTINGS`].
    fn default() -> Self {
        DEFAULT_SETTINGS.clone()
    }
}

/// Replacement input for a settings document.
///
/// A `None` field means the top-level key was absent from the caller's
/// document; how absence is resolved depends on the store's merge policy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsPatch {
    pub display_dark: Option<bool>,
    pub notifications: Option<NotificationMatrix>,
}

impl From<SettingsDocument> for SettingsPatch {
    fn from(document: SettingsDocument) -> Self {
        Self {
            display_dark: Some(document.display_dark),
            notifications: Some(document.notifications),
        }
    }
}

/// A validated single-field notification update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationChange {
    pub channel: NotificationChannel,
    pub mode: String,
    pub value: ModeValue,
}

/// User directory record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
