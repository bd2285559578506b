//! Trigger events — case and task changes that rules react to.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::workflow::Trigger;

/// Something that happened to a case or task.
///
/// `target` is the recipient the resulting notifications are addressed to
/// (a user handle, email address or phone number, depending on the
/// action). `context` is the data `{{placeholders}}` resolve against, e.g.
/// `{"case": {"title": "Printer on fire"}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerEvent {
    pub trigger: Trigger,
    pub target: String,
    #[serde(default = "empty_context")]
    pub context: serde_json::Value,
}

fn empty_context() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl TriggerEvent {
    #[must_use]
    pub fn new(trigger: Trigger, target: impl Into<String>, context: serde_json::Value) -> Self {
        Self {
            trigger,
            target: target.into(),
            context,
        }
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
}
