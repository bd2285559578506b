use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use casedesk_app::ports::ExecutionLog;
use casedesk_domain::error::CaseDeskError;
use casedesk_domain::execution::RuleExecution;
use casedesk_domain::id::RuleId;

/// Default number of executions kept across all rules.
const DEFAULT_CAPACITY: usize = 1000;

/// In-memory execution history.
///
/// Holds at most `capacity` entries across all rules; the oldest entry is
/// dropped when a new one would exceed it.
#[derive(Debug)]
pub struct InMemoryExecutionLog {
    entries: Mutex<VecDeque<RuleExecution>>,
    capacity: usize,
}

impl Default for InMemoryExecutionLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl InMemoryExecutionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY))),
            capacity,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<RuleExecution>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ExecutionLog for InMemoryExecutionLog {
    fn record(
        &self,
        execution: RuleExecution,
    ) -> impl Future<Output = Result<RuleExecution, CaseDeskError>> + Send {
        {
            let mut entries = self.lock();
            if entries.len() == self.capacity {
                entries.pop_front();
            }
            entries.push_back(execution.clone());
        }
        tracing::trace!(execution_id = %execution.id, rule_id = %execution.rule_id, "execution recorded");
        async { Ok(execution) }
    }

    fn find_by_rule(
        &self,
        rule_id: &RuleId,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<RuleExecution>, CaseDeskError>> + Send {
        let found: Vec<RuleExecution> = self
            .lock()
            .iter()
            .rev()
            .filter(|e| &e.rule_id == rule_id)
            .take(limit)
            .cloned()
            .collect();
        async { Ok(found) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casedesk_domain::dispatch::{OutcomeStatus, RuleOutcome};
    use casedesk_domain::event::TriggerEvent;
    use casedesk_domain::workflow::Trigger;
    use serde_json::json;

    fn execution(rule: i64, n: u32) -> RuleExecution {
        let event = TriggerEvent::new(Trigger::CaseStatusChange, "dana", json!({ "n": n }));
        RuleExecution::record(
            &event,
            &RuleOutcome {
                rule_id: RuleId::from_sequence(rule),
                rule_name: "Rule".to_string(),
                condition: String::new(),
                status: OutcomeStatus::Skipped {
                    reason: "nothing to say".to_string(),
                },
            },
        )
    }

    #[tokio::test]
    async fn should_return_executions_of_one_rule_newest_first() {
        let log = InMemoryExecutionLog::new();
        log.record(execution(1, 1)).await.unwrap();
        log.record(execution(2, 2)).await.unwrap();
        log.record(execution(1, 3)).await.unwrap();

        let found = log.find_by_rule(&RuleId::from_sequence(1), 10).await.unwrap();
        let ns: Vec<u64> = found.iter().map(|e| e.context["n"].as_u64().unwrap()).collect();
        assert_eq!(ns, vec![3, 1]);
    }

    #[tokio::test]
    async fn should_honour_limit() {
        let log = InMemoryExecutionLog::new();
        for n in 0..5 {
            log.record(execution(1, n)).await.unwrap();
        }
        let found = log.find_by_rule(&RuleId::from_sequence(1), 2).await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn should_drop_oldest_entry_when_full() {
        let log = InMemoryExecutionLog::with_capacity(2);
        for n in 1..=3 {
            log.record(execution(1, n)).await.unwrap();
        }

        assert_eq!(log.len(), 2);
        let found = log.find_by_rule(&RuleId::from_sequence(1), 10).await.unwrap();
        let ns: Vec<u64> = found.iter().map(|e| e.context["n"].as_u64().unwrap()).collect();
        assert_eq!(ns, vec![3, 2]);
    }
}
