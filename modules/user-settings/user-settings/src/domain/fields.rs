/// Field paths reported in validation errors.
pub struct SettingsFields;

impl SettingsFields {
    pub const BODY: &'static str = "body";
    pub const DISPLAY_DARK: &'static str = "displayDark";
    pub const NOTIFICATIONS: &'static str = "notifications";
    pub const NOTIFICATION_TYPE: &'static str = "notificationType";
    pub const NOTIFICATION_MODE: &'static str = "notificationMode";
    pub const NOTIFICATION_MODE_VALUE: &'static str = "notificationModeValue";
    pub const USER_ID: &'static str = "id";
}
