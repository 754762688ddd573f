#[cfg(test)]
mod tests {
    use super::super::record::{ModeValueRecord, SettingsRecord, SnapshotRecord};
    use std::collections::BTreeMap;
    use user_settings_sdk::models::{
        ModeValue, NotificationChannel, SettingsDocument, UnknownChannel,
    };

    #[test]
    fn test_document_to_record_uses_wire_channel_names() {
        let record: SettingsRecord = SettingsDocument::default().into();

        assert!(!record.display_dark);
        assert_eq!(
            record.notifications["email"]["daily"],
            ModeValueRecord::Token("enabled".to_owned())
        );
        assert_eq!(
            record.notifications["mobilepush"]["app_dm"],
            ModeValueRecord::Token("disabled".to_owned())
        );
    }

    #[test]
    fn test_record_to_document_conversion() {
        let mut email = BTreeMap::new();
        email.insert("daily".to_owned(), ModeValueRecord::Flag(false));
        let record = SettingsRecord {
            display_dark: true,
            notifications: BTreeMap::from([("email".to_owned(), email)]),
        };

        let document = SettingsDocument::try_from(record).unwrap();

        assert!(document.display_dark);
        assert_eq!(
            document.notifications.get(NotificationChannel::Email, "daily"),
            Some(&ModeValue::Flag(false))
        );
        assert!(
            document
                .notifications
                .channel(NotificationChannel::MobilePush)
                .is_none()
        );
    }

    #[test]
    fn test_record_with_unknown_channel_is_rejected() {
        let record = SettingsRecord {
            display_dark: false,
            notifications: BTreeMap::from([("sms".to_owned(), BTreeMap::new())]),
        };

        let err = SettingsDocument::try_from(record).unwrap_err();

        assert_eq!(err, UnknownChannel("sms".to_owned()));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut snapshot = SnapshotRecord::default();
        snapshot
            .users
            .insert("42".to_owned(), SettingsDocument::default().into());

        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["version"], 1);
        assert_eq!(json["users"]["42"]["displayDark"], false);
        assert_eq!(json["users"]["42"]["notifications"]["email"]["daily"], "enabled");
    }

    #[test]
    fn test_mode_values_deserialize_untagged() {
        let record: SettingsRecord = serde_json::from_str(
            r#"{"displayDark":true,"notifications":{"mobilepush":{"app_dm":true,"app_ads":"weekly"}}}"#,
        )
        .unwrap();

        let modes = &record.notifications["mobilepush"];
        assert_eq!(modes["app_dm"], ModeValueRecord::Flag(true));
        assert_eq!(modes["app_ads"], ModeValueRecord::Token("weekly".to_owned()));
    }
}
