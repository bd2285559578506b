//! Rule draft — the raw, unvalidated form a user fills in.

use serde::{Deserialize, Serialize};

use super::{ActionKind, Trigger, WorkflowRuleInput};
use crate::error::ValidationError;

/// Free-form rule input as typed by a user.
///
/// `trigger` and `action` hold either a display label
/// (`"Case Status Change"`) or a wire tag (`"case_status_change"`); an
/// empty string means "not selected yet". Missing JSON fields default to
/// empty so partially filled forms deserialize; `enabled` defaults to on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleDraft {
    pub name: String,
    pub trigger: String,
    pub condition: String,
    pub action: String,
    pub action_detail: String,
    pub enabled: bool,
}

impl Default for RuleDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            trigger: String::new(),
            condition: String::new(),
            action: String::new(),
            action_detail: String::new(),
            enabled: super::enabled_by_default(),
        }
    }
}

impl RuleDraft {
    /// Whether every text field is still blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.trigger.is_empty()
            && self.condition.is_empty()
            && self.action.is_empty()
            && self.action_detail.is_empty()
    }

    /// Reset to the empty form.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Run the validation gate.
    ///
    /// Required fields are checked in form order (name, trigger, action)
    /// before any label is parsed, so a half-filled form always reports the
    /// first blank field.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyName`], [`ValidationError::MissingTrigger`],
    ///   [`ValidationError::MissingAction`] for blank required fields
    /// - [`ValidationError::UnknownTrigger`], [`ValidationError::UnknownAction`]
    ///   for labels outside the closed sets
    pub fn validate(&self) -> Result<WorkflowRuleInput, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.trigger.trim().is_empty() {
            return Err(ValidationError::MissingTrigger);
        }
        if self.action.trim().is_empty() {
            return Err(ValidationError::MissingAction);
        }

        let trigger: Trigger = self.trigger.parse()?;
        let action: ActionKind = self.action.parse()?;

        WorkflowRuleInput::builder()
            .name(self.name.trim())
            .trigger(trigger)
            .condition(self.condition.clone())
            .action(action)
            .action_detail(self.action_detail.clone())
            .enabled(self.enabled)
            .build()
    }
}

impl From<&WorkflowRuleInput> for RuleDraft {
    fn from(input: &WorkflowRuleInput) -> Self {
        Self {
            name: input.name.clone(),
            trigger: input.trigger.label().to_string(),
            condition: input.condition.clone(),
            action: input.action.label().to_string(),
            action_detail: input.action_detail.clone(),
            enabled: input.enabled,
        }
    }
}
