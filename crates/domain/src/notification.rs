//! Notifications — what gets handed to a delivery channel.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::DispatchId;
use crate::time::Timestamp;

/// Delivery channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    InApp,
    Email,
    Sms,
    Call,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::InApp => "in_app",
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Call => "call",
        })
    }
}

/// A message addressed to one recipient over one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    /// User handle, email address or phone number.
    pub target: String,
    /// Only meaningful for email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn new(
        kind: NotificationKind,
        target: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            target: target.into(),
            subject: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTarget`] when `target` is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.target.trim().is_empty() {
            return Err(ValidationError::EmptyTarget);
        }
        Ok(())
    }

    /// The acknowledgement shown to the user once the notification has
    /// been handed over without real delivery.
    #[must_use]
    pub fn simulated_acknowledgement(&self) -> String {
        match self.kind {
            NotificationKind::Email => format!(
                "Email to {} with subject \"{}\" has been simulated.",
                self.target,
                self.subject.as_deref().unwrap_or_default()
            ),
            NotificationKind::Sms => format!("SMS to {} has been simulated.", self.target),
            NotificationKind::Call => format!("Call to {} has been simulated.", self.target),
            NotificationKind::InApp => format!("New Notification: {}", self.message),
        }
    }
}

/// Proof that a notifier accepted a [`Notification`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReceipt {
    pub id: DispatchId,
    pub kind: NotificationKind,
    pub target: String,
    pub acknowledgement: String,
    /// `true` when nothing left the process.
    pub simulated: bool,
    pub dispatched_at: Timestamp,
}
