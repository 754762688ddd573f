use serde::{Deserialize, Serialize};
use user_settings_sdk::models::{NotificationChange, SettingsDocument, SettingsPatch};

/// Strategy used to combine a replacement document with existing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// `{...defaults, ...patch}`: top-level keys present in the patch win,
    /// absent keys revert to the defaults. The previous document is ignored,
    /// so a replace without `notifications` resets the whole matrix.
    #[default]
    Shallow,
    /// Patch applied onto the current document (or defaults), with the
    /// notification matrix merged channel by channel, mode by mode.
    Deep,
}

impl MergePolicy {
    #[must_use]
    pub fn apply(self, current: Option<SettingsDocument>, patch: SettingsPatch) -> SettingsDocument {
        match self {
            Self::Shallow => shallow_merge(SettingsDocument::default(), patch),
            Self::Deep => deep_merge(current.unwrap_or_default(), patch),
        }
    }
}

fn shallow_merge(mut base: SettingsDocument, patch: SettingsPatch) -> SettingsDocument {
    if let Some(display_dark) = patch.display_dark {
        base.display_dark = display_dark;
    }
    if let Some(notifications) = patch.notifications {
        base.notifications = notifications;
    }
    base
}

fn deep_merge(mut base: SettingsDocument, patch: SettingsPatch) -> SettingsDocument {
    if let Some(display_dark) = patch.display_dark {
        base.display_dark = display_dark;
    }
    for (channel, modes) in patch.notifications.into_iter().flatten() {
        for (mode, value) in modes {
            base.notifications.set(channel, mode, value);
        }
    }
    base
}

/// Deep-sets one notification value on the current document (or defaults).
#[must_use]
pub fn apply_change(current: Option<SettingsDocument>, change: NotificationChange) -> SettingsDocument {
    let mut document = current.unwrap_or_default();
    document
        .notifications
        .set(change.channel, change.mode, change.value);
    document
}
