//! User Settings SDK
//!
//! This crate provides the public API for the user-settings module:
//! - `UserSettingsApi` and `UsersDirectoryApi` traits for in-process consumers
//! - Model types (`SettingsDocument`, `NotificationMatrix`, `SettingsPatch`, `User`)
//! - The `ServiceResponse` envelope returned by every service operation
//! - Error type (`UserSettingsError`)
//!
//! ```ignore
//! let client: Arc<dyn UserSettingsApi> = module.client();
//! let settings = client.get_settings("42").await?;
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod errors;
pub mod models;
pub mod response;

pub use api::{UserSettingsApi, UsersDirectoryApi};
pub use errors::UserSettingsError;
pub use models::{
    DEFAULT_SETTINGS, ModeMap, ModeValue, NotificationChange, NotificationChannel,
    NotificationMatrix, SettingsDocument, SettingsPatch, UnknownChannel, User,
};
pub use response::{FieldViolation, ResponseStatus, ServiceResponse};
