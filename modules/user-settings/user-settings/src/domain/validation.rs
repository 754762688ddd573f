//! Narrowing of untrusted input into validated settings types.
//!
//! Both write paths go through here: the raw JSON entry points check the
//! shape of the body and then run the same field checks as the typed entry
//! points. Every violation is collected before returning.

use serde_json::{Map, Value};
use user_settings_sdk::models::{
    ModeMap, ModeValue, NotificationChange, NotificationChannel, NotificationMatrix, SettingsPatch,
};
use user_settings_sdk::response::FieldViolation;

use super::error::DomainError;
use super::fields::SettingsFields;

#[derive(Debug, Clone, Copy)]
pub struct Validator {
    max_mode_length: usize,
    max_value_length: usize,
}

#[derive(Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    fn finish<T>(self, value: Option<T>) -> Result<T, DomainError> {
        match value {
            Some(value) if self.0.is_empty() => Ok(value),
            _ => Err(DomainError::Validation { violations: self.0 }),
        }
    }
}

impl Validator {
    #[must_use]
    pub fn new(max_mode_length: usize, max_value_length: usize) -> Self {
        Self {
            max_mode_length,
            max_value_length,
        }
    }

    /// Validates a single notification update given as already-typed parts.
    ///
    /// # Errors
    /// Returns [`DomainError::Validation`] listing every rejected field.
    pub fn notification_change(
        &self,
        channel: &str,
        mode: &str,
        value: ModeValue,
    ) -> Result<NotificationChange, DomainError> {
        let mut violations = Violations::default();
        let channel = check_channel(channel, SettingsFields::NOTIFICATION_TYPE, &mut violations);
        self.check_mode(mode, SettingsFields::NOTIFICATION_MODE, &mut violations);
        self.check_value(&value, SettingsFields::NOTIFICATION_MODE_VALUE, &mut violations);

        violations.finish(channel.map(|channel| NotificationChange {
            channel,
            mode: mode.to_owned(),
            value,
        }))
    }

    /// Validates mode names and values of a typed replacement document.
    ///
    /// # Errors
    /// Returns [`DomainError::Validation`] listing every rejected field.
    pub fn settings_patch(&self, patch: SettingsPatch) -> Result<SettingsPatch, DomainError> {
        let mut violations = Violations::default();
        if let Some(notifications) = &patch.notifications {
            for (channel, modes) in notifications.iter() {
                let channel_field = format!("{}.{channel}", SettingsFields::NOTIFICATIONS);
                for (mode, value) in modes {
                    self.check_mode(mode, &channel_field, &mut violations);
                    self.check_value(value, &format!("{channel_field}.{mode}"), &mut violations);
                }
            }
        }
        violations.finish(Some(patch))
    }

    /// Narrows a raw `{notificationType, notificationMode, notificationModeValue}` body.
    ///
    /// # Errors
    /// Returns [`DomainError::Validation`] listing every rejected field.
    pub fn parse_notification_body(&self, body: &Value) -> Result<NotificationChange, DomainError> {
        let object = require_object(body)?;
        let mut violations = Violations::default();
        reject_unknown_keys(
            object,
            &[
                SettingsFields::NOTIFICATION_TYPE,
                SettingsFields::NOTIFICATION_MODE,
                SettingsFields::NOTIFICATION_MODE_VALUE,
            ],
            &mut violations,
        );

        let channel = required_str(object, SettingsFields::NOTIFICATION_TYPE, &mut violations)
            .and_then(|raw| check_channel(raw, SettingsFields::NOTIFICATION_TYPE, &mut violations));

        let mode = required_str(object, SettingsFields::NOTIFICATION_MODE, &mut violations);
        if let Some(mode) = mode {
            self.check_mode(mode, SettingsFields::NOTIFICATION_MODE, &mut violations);
        }

        let value = match object.get(SettingsFields::NOTIFICATION_MODE_VALUE) {
            None => {
                violations.push(SettingsFields::NOTIFICATION_MODE_VALUE, "is required");
                None
            }
            Some(raw) => self.parse_mode_value(
                raw,
                SettingsFields::NOTIFICATION_MODE_VALUE,
                &mut violations,
            ),
        };

        let change = match (channel, mode, value) {
            (Some(channel), Some(mode), Some(value)) => Some(NotificationChange {
                channel,
                mode: mode.to_owned(),
                value,
            }),
            _ => None,
        };
        violations.finish(change)
    }

    /// Narrows a raw settings document body used by the replace path.
    ///
    /// # Errors
    /// Returns [`DomainError::Validation`] listing every rejected field.
    pub fn parse_settings_body(&self, body: &Value) -> Result<SettingsPatch, DomainError> {
        let object = require_object(body)?;
        let mut violations = Violations::default();
        reject_unknown_keys(
            object,
            &[SettingsFields::DISPLAY_DARK, SettingsFields::NOTIFICATIONS],
            &mut violations,
        );

        let display_dark = match object.get(SettingsFields::DISPLAY_DARK) {
            None => None,
            Some(Value::Bool(flag)) => Some(*flag),
            Some(other) => {
                violations.push(
                    SettingsFields::DISPLAY_DARK,
                    format!("must be a boolean, got {}", json_kind(other)),
                );
                None
            }
        };

        let notifications = match object.get(SettingsFields::NOTIFICATIONS) {
            None => None,
            Some(Value::Object(channels)) => Some(self.parse_matrix(channels, &mut violations)),
            Some(other) => {
                violations.push(
                    SettingsFields::NOTIFICATIONS,
                    format!("must be an object, got {}", json_kind(other)),
                );
                None
            }
        };

        violations.finish(Some(SettingsPatch {
            display_dark,
            notifications,
        }))
    }

    fn parse_matrix(
        &self,
        channels: &Map<String, Value>,
        violations: &mut Violations,
    ) -> NotificationMatrix {
        let mut matrix = Vec::with_capacity(channels.len());
        for (name, raw_modes) in channels {
            let channel_field = format!("{}.{name}", SettingsFields::NOTIFICATIONS);
            let channel = check_channel(name, &channel_field, violations);
            let Value::Object(raw_modes) = raw_modes else {
                violations.push(
                    &channel_field,
                    format!("must be an object, got {}", json_kind(raw_modes)),
                );
                continue;
            };

            let mut modes = ModeMap::new();
            for (mode, raw_value) in raw_modes {
                self.check_mode(mode, &channel_field, violations);
                let value_field = format!("{channel_field}.{mode}");
                if let Some(value) = self.parse_mode_value(raw_value, &value_field, violations) {
                    modes.insert(mode.clone(), value);
                }
            }
            if let Some(channel) = channel {
                matrix.push((channel, modes));
            }
        }
        matrix.into_iter().collect()
    }

    fn parse_mode_value(
        &self,
        raw: &Value,
        field: &str,
        violations: &mut Violations,
    ) -> Option<ModeValue> {
        let value = match raw {
            Value::String(token) => ModeValue::Token(token.clone()),
            Value::Bool(flag) => ModeValue::Flag(*flag),
            other => {
                violations.push(
                    field,
                    format!("must be a string or boolean, got {}", json_kind(other)),
                );
                return None;
            }
        };
        self.check_value(&value, field, violations);
        Some(value)
    }

    fn check_mode(&self, mode: &str, field: &str, violations: &mut Violations) {
        if mode.is_empty() {
            violations.push(field, "mode name must be a non-empty string");
        } else if mode.len() > self.max_mode_length {
            violations.push(
                field,
                format!(
                    "mode name exceeds maximum length of {}",
                    self.max_mode_length
                ),
            );
        }
    }

    fn check_value(&self, value: &ModeValue, field: &str, violations: &mut Violations) {
        if let ModeValue::Token(token) = value
            && token.len() > self.max_value_length
        {
            violations.push(
                field,
                format!("exceeds maximum length of {}", self.max_value_length),
            );
        }
    }
}

fn check_channel(
    raw: &str,
    field: &str,
    violations: &mut Violations,
) -> Option<NotificationChannel> {
    if let Ok(channel) = raw.parse() {
        return Some(channel);
    }
    let expected = NotificationChannel::ALL
        .iter()
        .map(|channel| channel.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    violations.push(
        field,
        format!("unknown notification channel '{raw}'; expected one of: {expected}"),
    );
    None
}

fn require_object(body: &Value) -> Result<&Map<String, Value>, DomainError> {
    body.as_object().ok_or_else(|| {
        DomainError::validation(
            SettingsFields::BODY,
            format!("must be a JSON object, got {}", json_kind(body)),
        )
    })
}

fn reject_unknown_keys(object: &Map<String, Value>, allowed: &[&str], violations: &mut Violations) {
    for key in object.keys() {
        if !allowed.contains(&key.as_str()) {
            violations.push(key, "is not allowed");
        }
    }
}

fn required_str<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    violations: &mut Violations,
) -> Option<&'a str> {
    match object.get(field) {
        None => {
            violations.push(field, "is required");
            None
        }
        Some(Value::String(s)) => Some(s.as_str()),
        Some(other) => {
            violations.push(field, format!("must be a string, got {}", json_kind(other)));
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
