use std::collections::BTreeMap;

use user_settings_sdk::models::{
    ModeMap, ModeValue, NotificationChannel, NotificationMatrix, SettingsDocument, UnknownChannel,
};

use super::record::{ModeValueRecord, SettingsRecord};

impl From<ModeValue> for ModeValueRecord {
    fn from(value: ModeValue) -> Self {
        match value {
            ModeValue::Token(token) => Self::Token(token),
            ModeValue::Flag(flag) => Self::Flag(flag),
        }
    }
}

impl From<ModeValueRecord> for ModeValue {
    fn from(record: ModeValueRecord) -> Self {
        match record {
            ModeValueRecord::Token(token) => Self::Token(token),
            ModeValueRecord::Flag(flag) => Self::Flag(flag),
        }
    }
}

impl From<SettingsDocument> for SettingsRecord {
    fn from(document: SettingsDocument) -> Self {
        Self {
            display_dark: document.display_dark,
            notifications: document
                .notifications
                .into_iter()
                .map(|(channel, modes)| {
                    let modes: BTreeMap<String, ModeValueRecord> =
                        modes.into_iter().map(|(m, v)| (m, v.into())).collect();
                    (channel.as_str().to_owned(), modes)
                })
                .collect(),
        }
    }
}

impl TryFrom<SettingsRecord> for SettingsDocument {
    type Error = UnknownChannel;

    fn try_from(record: SettingsRecord) -> Result<Self, Self::Error> {
        let notifications = record
            .notifications
            .into_iter()
            .map(|(name, modes)| -> Result<(NotificationChannel, ModeMap), UnknownChannel> {
                let channel: NotificationChannel = name.parse()?;
                let modes: ModeMap = modes.into_iter().map(|(m, v)| (m, v.into())).collect();
                Ok((channel, modes))
            })
            .collect::<Result<NotificationMatrix, _>>()?;

        Ok(Self {
            display_dark: record.display_dark,
            notifications,
        })
    }
}
