//! Rule executions — one history entry per rule per fired event.

use serde::{Deserialize, Serialize};

use crate::dispatch::{OutcomeStatus, RuleOutcome};
use crate::event::TriggerEvent;
use crate::id::{ExecutionId, RuleId};
use crate::time::{Timestamp, now};
use crate::workflow::Trigger;

/// What one rule did for one trigger event, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleExecution {
    pub id: ExecutionId,
    pub rule_id: RuleId,
    pub trigger: Trigger,
    pub target: String,
    /// The event context the action detail was rendered against.
    pub context: serde_json::Value,
    #[serde(flatten)]
    pub status: OutcomeStatus,
    pub executed_at: Timestamp,
}

impl RuleExecution {
    #[must_use]
    pub fn record(event: &TriggerEvent, outcome: &RuleOutcome) -> Self {
        Self {
            id: ExecutionId::new(),
            rule_id: outcome.rule_id.clone(),
            trigger: event.trigger,
            target: event.target.clone(),
            context: event.context.clone(),
            status: outcome.status.clone(),
            executed_at: now(),
        }
    }

    #[must_use]
    pub fn is_dispatched(&self) -> bool {
        matches!(self.status, OutcomeStatus::Dispatched { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_record_event_and_outcome() {
        let event = TriggerEvent::new(
            Trigger::CaseStatusChange,
            "dana",
            json!({"case": {"title": "Server down"}}),
        );
        let outcome = RuleOutcome {
            rule_id: RuleId::from_sequence(1),
            rule_name: "Notify on High Priority Case".to_string(),
            condition: String::new(),
            status: OutcomeStatus::Failed {
                error: "gateway down".to_string(),
            },
        };

        let execution = RuleExecution::record(&event, &outcome);

        assert_eq!(execution.rule_id.to_string(), "wf-1");
        assert_eq!(execution.target, "dana");
        assert_eq!(execution.context["case"]["title"], "Server down");
        assert!(!execution.is_dispatched());

        let json = serde_json::to_value(&execution).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "gateway down");
        assert_eq!(json["trigger"], "case_status_change");
    }
}
