//! Dispatch reports — what happened when a trigger event was fired.

use serde::{Deserialize, Serialize};

use crate::id::RuleId;
use crate::notification::DispatchReceipt;
use crate::workflow::Trigger;

/// Result of firing one trigger event against the rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReport {
    pub trigger: Trigger,
    /// One entry per rule whose trigger matched, in rule order.
    pub outcomes: Vec<RuleOutcome>,
}

impl DispatchReport {
    #[must_use]
    pub fn new(trigger: Trigger) -> Self {
        Self {
            trigger,
            outcomes: Vec::new(),
        }
    }

    /// Number of notifications actually handed to the notifier.
    #[must_use]
    pub fn dispatched(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OutcomeStatus::Dispatched { .. }))
            .count()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OutcomeStatus::Skipped { .. }))
            .count()
    }

    /// Number of notifications the notifier refused.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, OutcomeStatus::Failed { .. }))
            .count()
    }
}

/// What happened for a single matching rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule_id: RuleId,
    pub rule_name: String,
    /// The rule's condition, copied verbatim. Conditions are not evaluated.
    pub condition: String,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

/// `Skipped` means no notification was built (the template did not
/// render); `Failed` means one was built but the notifier refused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    Dispatched { receipt: DispatchReceipt },
    Skipped { reason: String },
    Failed { error: String },
}
