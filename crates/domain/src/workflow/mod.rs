//! Workflow rules — trigger → condition → action mappings.
//!
//! A [`WorkflowRule`] names a case or task [`Trigger`], a free-text
//! condition, the [`ActionKind`] to perform and an optional action detail
//! that may contain `{{variable}}` placeholders (see
//! [`crate::template`]). Rules are created from a [`RuleDraft`] through the
//! validation gate and kept, in insertion order, by a [`RuleStore`].
//! Disabled rules stay in the store but are never fired.

mod action;
mod draft;
mod store;
mod trigger;

pub use action::ActionKind;
pub use draft::RuleDraft;
pub use store::{RuleFilter, RuleStore};
pub use trigger::Trigger;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::RuleId;
use crate::time::Timestamp;

/// A stored workflow rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRule {
    pub id: RuleId,
    pub name: String,
    pub trigger: Trigger,
    /// Human-readable predicate. Never parsed.
    #[serde(default)]
    pub condition: String,
    pub action: ActionKind,
    /// Message template, may contain `{{path}}` placeholders.
    #[serde(default)]
    pub action_detail: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    pub created_at: Timestamp,
}

impl WorkflowRule {
    /// Attach an identity to a validated input.
    #[must_use]
    pub fn from_input(id: RuleId, input: WorkflowRuleInput, created_at: Timestamp) -> Self {
        Self {
            id,
            name: input.name,
            trigger: input.trigger,
            condition: input.condition,
            action: input.action,
            action_detail: input.action_detail,
            enabled: input.enabled,
            created_at,
        }
    }

    /// The id-less part of the rule.
    #[must_use]
    pub fn input(&self) -> WorkflowRuleInput {
        WorkflowRuleInput {
            name: self.name.clone(),
            trigger: self.trigger,
            condition: self.condition.clone(),
            action: self.action,
            action_detail: self.action_detail.clone(),
            enabled: self.enabled,
        }
    }

    /// Replace every user-editable field, keeping id and creation time.
    pub fn apply(&mut self, input: WorkflowRuleInput) {
        self.name = input.name;
        self.trigger = input.trigger;
        self.condition = input.condition;
        self.action = input.action;
        self.action_detail = input.action_detail;
        self.enabled = input.enabled;
    }
}

pub(crate) fn enabled_by_default() -> bool {
    true
}

/// A validated rule that has not been stored yet.
///
/// Obtained from [`RuleDraft::validate`] or [`WorkflowRuleInput::builder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRuleInput {
    pub name: String,
    pub trigger: Trigger,
    #[serde(default)]
    pub condition: String,
    pub action: ActionKind,
    #[serde(default)]
    pub action_detail: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl WorkflowRuleInput {
    /// Create a builder for constructing a [`WorkflowRuleInput`].
    #[must_use]
    pub fn builder() -> WorkflowRuleInputBuilder {
        WorkflowRuleInputBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}

/// Step-by-step builder for [`WorkflowRuleInput`].
#[derive(Debug, Default)]
pub struct WorkflowRuleInputBuilder {
    name: Option<String>,
    trigger: Option<Trigger>,
    condition: Option<String>,
    action: Option<ActionKind>,
    action_detail: Option<String>,
    enabled: Option<bool>,
}

impl WorkflowRuleInputBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    #[must_use]
    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: ActionKind) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn action_detail(mut self, detail: impl Into<String>) -> Self {
        self.action_detail = Some(detail.into());
        self
    }

    /// Defaults to `true`.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Consume the builder, validate, and return a [`WorkflowRuleInput`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] among: blank name, missing
    /// trigger, missing action.
    pub fn build(self) -> Result<WorkflowRuleInput, ValidationError> {
        let name = self.name.unwrap_or_default();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let trigger = self.trigger.ok_or(ValidationError::MissingTrigger)?;
        let action = self.action.ok_or(ValidationError::MissingAction)?;

        let input = WorkflowRuleInput {
            name,
            trigger,
            condition: self.condition.unwrap_or_default(),
            action,
            action_detail: self.action_detail.unwrap_or_default(),
            enabled: self.enabled.unwrap_or(true),
        };
        input.validate()?;
        Ok(input)
    }
}
