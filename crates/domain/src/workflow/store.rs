//! Rule store — the ordered, in-memory set of workflow rules.

use super::{ActionKind, Trigger, WorkflowRule, WorkflowRuleInput};
use crate::error::ValidationError;
use crate::id::RuleId;
use crate::time::{Timestamp, now, unix_millis};

/// Ordered sequence of [`WorkflowRule`]s owned by a single session.
///
/// Insertion order is display order. Ids are derived from the insertion
/// time in milliseconds and bumped past the last issued value, so two rules
/// added within the same millisecond still get distinct ids.
#[derive(Debug, Default, Clone)]
pub struct RuleStore {
    rules: Vec<WorkflowRule>,
    last_sequence: i64,
}

impl RuleStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated rule, assigning a fresh id.
    ///
    /// Names are not required to be unique.
    pub fn add(&mut self, input: WorkflowRuleInput) -> WorkflowRule {
        self.add_at(input, now())
    }

    /// Same as [`add`](Self::add) with an explicit creation time.
    pub fn add_at(&mut self, input: WorkflowRuleInput, at: Timestamp) -> WorkflowRule {
        let sequence = unix_millis(at).max(self.last_sequence.saturating_add(1));
        self.last_sequence = sequence;

        let rule = WorkflowRule::from_input(RuleId::from_sequence(sequence), input, at);
        self.rules.push(rule.clone());
        rule
    }

    /// Append a rule that already carries an id (seeding, imports).
    ///
    /// # Errors
    ///
    /// - [`ValidationError::DuplicateId`] if a rule with the same id exists
    /// - [`ValidationError::EmptyName`] if the rule name is blank
    /// - [`ValidationError::InvalidId`] if the id would leave no room for
    ///   generated ids after it
    pub fn insert(&mut self, rule: WorkflowRule) -> Result<WorkflowRule, ValidationError> {
        if self.get(&rule.id).is_some() {
            return Err(ValidationError::DuplicateId(rule.id.to_string()));
        }
        if rule.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if let Some(sequence) = rule.id.sequence() {
            if sequence == i64::MAX {
                return Err(ValidationError::InvalidId(rule.id.to_string()));
            }
            self.last_sequence = self.last_sequence.max(sequence);
        }
        self.rules.push(rule.clone());
        Ok(rule)
    }

    /// Replace the editable fields of the rule with `id`.
    ///
    /// The id, creation time and position are kept. Returns `None` when no
    /// rule has that id.
    pub fn update(&mut self, id: &RuleId, input: WorkflowRuleInput) -> Option<WorkflowRule> {
        let rule = self.rules.iter_mut().find(|rule| &rule.id == id)?;
        rule.apply(input);
        Some(rule.clone())
    }

    /// Remove the rule with `id`, returning it.
    ///
    /// An unknown id is a no-op and returns `None`. The relative order of
    /// the remaining rules is unchanged.
    pub fn remove(&mut self, id: &RuleId) -> Option<WorkflowRule> {
        let index = self.rules.iter().position(|rule| &rule.id == id)?;
        Some(self.rules.remove(index))
    }

    /// All rules in insertion order.
    #[must_use]
    pub fn list(&self) -> &[WorkflowRule] {
        &self.rules
    }

    #[must_use]
    pub fn get(&self, id: &RuleId) -> Option<&WorkflowRule> {
        self.rules.iter().find(|rule| &rule.id == id)
    }

    /// Rules matching `filter`, in insertion order.
    #[must_use]
    pub fn find(&self, filter: &RuleFilter) -> Vec<WorkflowRule> {
        self.rules
            .iter()
            .filter(|rule| filter.matches(rule))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Optional criteria narrowing a rule listing. All set criteria must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleFilter {
    pub trigger: Option<Trigger>,
    pub action: Option<ActionKind>,
    pub enabled: Option<bool>,
    /// Case-insensitive substring of the rule name.
    pub name_contains: Option<String>,
}

impl RuleFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trigger.is_none()
            && self.action.is_none()
            && self.enabled.is_none()
            && self.name_contains.is_none()
    }

    #[must_use]
    pub fn matches(&self, rule: &WorkflowRule) -> bool {
        if self.trigger.is_some_and(|t| t != rule.trigger) {
            return false;
        }
        if self.action.is_some_and(|a| a != rule.action) {
            return false;
        }
        if self.enabled.is_some_and(|e| e != rule.enabled) {
            return false;
        }
        if let Some(needle) = &self.name_contains
            && !rule.name.to_lowercase().contains(&needle.to_lowercase())
        {
            return false;
        }
        true
    }
}
