//! Test doubles shared by the unit tests of this crate.

use std::future::Future;
use std::sync::Mutex;

use casedesk_domain::error::CaseDeskError;
use casedesk_domain::execution::RuleExecution;
use casedesk_domain::id::{DispatchId, RuleId};
use casedesk_domain::notification::{DispatchReceipt, Notification, NotificationKind};
use casedesk_domain::workflow::{RuleFilter, RuleStore, WorkflowRule, WorkflowRuleInput};

use crate::ports::{ExecutionLog, Notifier, RuleRepository};

#[derive(Default)]
pub struct InMemoryRuleRepo {
    store: Mutex<RuleStore>,
}

impl RuleRepository for InMemoryRuleRepo {
    fn add(
        &self,
        input: WorkflowRuleInput,
    ) -> impl Future<Output = Result<WorkflowRule, CaseDeskError>> + Send {
        let rule = self.store.lock().unwrap().add(input);
        async { Ok(rule) }
    }

    fn insert(
        &self,
        rule: WorkflowRule,
    ) -> impl Future<Output = Result<WorkflowRule, CaseDeskError>> + Send {
        let result = self.store.lock().unwrap().insert(rule);
        async { result.map_err(Into::into) }
    }

    fn update(
        &self,
        id: &RuleId,
        input: WorkflowRuleInput,
    ) -> impl Future<Output = Result<Option<WorkflowRule>, CaseDeskError>> + Send {
        let updated = self.store.lock().unwrap().update(id, input);
        async { Ok(updated) }
    }

    fn remove(
        &self,
        id: &RuleId,
    ) -> impl Future<Output = Result<Option<WorkflowRule>, CaseDeskError>> + Send {
        let removed = self.store.lock().unwrap().remove(id);
        async { Ok(removed) }
    }

    fn get(
        &self,
        id: &RuleId,
    ) -> impl Future<Output = Result<Option<WorkflowRule>, CaseDeskError>> + Send {
        let rule = self.store.lock().unwrap().get(id).cloned();
        async { Ok(rule) }
    }

    fn find(
        &self,
        filter: &RuleFilter,
    ) -> impl Future<Output = Result<Vec<WorkflowRule>, CaseDeskError>> + Send {
        let rules = self.store.lock().unwrap().find(filter);
        async { Ok(rules) }
    }
}

/// Notifier that records every notification and refuses the kinds it is
/// told to fail on.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Notification>>,
    pub failing_kinds: Vec<NotificationKind>,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self::failing_for(&[
            NotificationKind::InApp,
            NotificationKind::Email,
            NotificationKind::Sms,
            NotificationKind::Call,
        ])
    }

    pub fn failing_for(kinds: &[NotificationKind]) -> Self {
        Self {
            sent: Mutex::default(),
            failing_kinds: kinds.to_vec(),
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<DispatchReceipt, CaseDeskError>> + Send {
        let result = if self.failing_kinds.contains(&notification.kind) {
            Err(CaseDeskError::Dispatch(Box::new(std::io::Error::other(
                "gateway down",
            ))))
        } else {
            let receipt = DispatchReceipt {
                id: DispatchId::new(),
                kind: notification.kind,
                target: notification.target.clone(),
                acknowledgement: notification.simulated_acknowledgement(),
                simulated: true,
                dispatched_at: casedesk_domain::time::now(),
            };
            self.sent.lock().unwrap().push(notification);
            Ok(receipt)
        };
        async { result }
    }
}

#[derive(Default)]
pub struct RecordingExecutionLog {
    entries: Mutex<Vec<RuleExecution>>,
}

impl RecordingExecutionLog {
    pub fn entries(&self) -> Vec<RuleExecution> {
        self.entries.lock().unwrap().clone()
    }
}

impl ExecutionLog for RecordingExecutionLog {
    fn record(
        &self,
        execution: RuleExecution,
    ) -> impl Future<Output = Result<RuleExecution, CaseDeskError>> + Send {
        self.entries.lock().unwrap().push(execution.clone());
        async { Ok(execution) }
    }

    fn find_by_rule(
        &self,
        rule_id: &RuleId,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<RuleExecution>, CaseDeskError>> + Send {
        let found: Vec<RuleExecution> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|e| &e.rule_id == rule_id)
            .take(limit)
            .cloned()
            .collect();
        async { Ok(found) }
    }
}
