//! User Settings Module Implementation
//!
//! The public API is defined in `user-settings-sdk` and re-exported here.

pub use user_settings_sdk::{
    ModeValue, NotificationChannel, NotificationMatrix, ServiceResponse, SettingsDocument,
    SettingsPatch, User, UserSettingsApi, UserSettingsError, UsersDirectoryApi,
};

pub mod module;
pub use module::UserSettingsModule;

pub mod config;
pub use config::{StorageConfig, UserSettingsConfig};
pub use domain::merge::MergePolicy;

pub mod local_client;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
