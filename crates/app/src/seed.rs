//! Example rules a fresh session starts with.

use casedesk_domain::id::RuleId;
use casedesk_domain::time::now;
use casedesk_domain::workflow::{ActionKind, Trigger, WorkflowRule, WorkflowRuleInput};

/// `wf-1` and `wf-2`: a high-priority case alert and a task completion email.
#[must_use]
pub fn example_rules() -> Vec<WorkflowRule> {
    let created_at = now();
    vec![
        WorkflowRule::from_input(
            RuleId::from_sequence(1),
            WorkflowRuleInput {
                name: "Notify on High Priority Case".to_string(),
                trigger: Trigger::CaseStatusChange,
                condition: "Status is 'High Priority'".to_string(),
                action: ActionKind::InAppNotification,
                action_detail: "New high priority case created: {{case.title}}".to_string(),
                enabled: true,
            },
            created_at,
        ),
        WorkflowRule::from_input(
            RuleId::from_sequence(2),
            WorkflowRuleInput {
                name: "Email Assignee on Task Completion".to_string(),
                trigger: Trigger::TaskStatusChange,
                condition: "Status is 'Completed'".to_string(),
                action: ActionKind::EmailNotification,
                action_detail: "Task '{{task.title}}' completed by {{task.assignee}}.".to_string(),
                enabled: true,
            },
            created_at,
        ),
    ]
}
