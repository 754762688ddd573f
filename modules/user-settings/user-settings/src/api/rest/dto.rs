use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use user_settings_sdk::models::{ModeValue, SettingsDocument, User};
use user_settings_sdk::response::{FieldViolation, ServiceResponse};

/// Wire form of [`ServiceResponse`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponseDto<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldViolationDto>,
}

impl<T, U: Into<T>> From<ServiceResponse<U>> for ServiceResponseDto<T> {
    fn from(resp: ServiceResponse<U>) -> Self {
        Self {
            success: resp.success,
            message: resp.message,
            data: resp.data.map(Into::into),
            status_code: resp.status_code,
            errors: resp.errors.into_iter().map(FieldViolationDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolationDto {
    pub field: String,
    pub message: String,
}

impl From<FieldViolation> for FieldViolationDto {
    fn from(v: FieldViolation) -> Self {
        Self {
            field: v.field,
            message: v.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocumentDto {
    pub display_dark: bool,
    pub notifications: BTreeMap<String, BTreeMap<String, ModeValueDto>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModeValueDto {
    Flag(bool),
    Token(String),
}

impl From<ModeValue> for ModeValueDto {
    fn from(value: ModeValue) -> Self {
        match value {
            ModeValue::Token(token) => Self::Token(token),
            ModeValue::Flag(flag) => Self::Flag(flag),
        }
    }
}

impl From<SettingsDocument> for SettingsDocumentDto {
    fn from(doc: SettingsDocument) -> Self {
        Self {
            display_dark: doc.display_dark,
            notifications: doc
                .notifications
                .into_iter()
                .map(|(channel, modes)| {
                    let modes: BTreeMap<String, ModeValueDto> =
                        modes.into_iter().map(|(m, v)| (m, v.into())).collect();
                    (channel.to_string(), modes)
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    #[serde(default)]
    pub filter: Option<String>,
}
