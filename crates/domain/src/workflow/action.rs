//! Action — the notification sent when a workflow rule fires.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::notification::NotificationKind;

/// Which notification channel a rule uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    InAppNotification,
    EmailNotification,
    SmsNotification,
    CallNotification,
}

impl ActionKind {
    /// Every action, in the order offered to users.
    pub const ALL: [Self; 4] = [
        Self::InAppNotification,
        Self::EmailNotification,
        Self::SmsNotification,
        Self::CallNotification,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::InAppNotification => "In-App Notification",
            Self::EmailNotification => "Email Notification",
            Self::SmsNotification => "SMS Notification",
            Self::CallNotification => "Call Notification",
        }
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::InAppNotification => "in_app_notification",
            Self::EmailNotification => "email_notification",
            Self::SmsNotification => "sms_notification",
            Self::CallNotification => "call_notification",
        }
    }

    /// Delivery channel used to carry out this action.
    #[must_use]
    pub fn notification_kind(self) -> NotificationKind {
        match self {
            Self::InAppNotification => NotificationKind::InApp,
            Self::EmailNotification => NotificationKind::Email,
            Self::SmsNotification => NotificationKind::Sms,
            Self::CallNotification => NotificationKind::Call,
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActionKind {
    type Err = ValidationError;

    /// Accepts either the wire tag or the display label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.tag() == needle || a.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::UnknownAction(needle.to_string()))
    }
}
