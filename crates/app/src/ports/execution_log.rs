//! Execution log port — per-rule history of fired events.

use std::future::Future;

use casedesk_domain::error::CaseDeskError;
use casedesk_domain::execution::RuleExecution;
use casedesk_domain::id::RuleId;

/// Append-only record of what each rule did when it fired.
pub trait ExecutionLog {
    /// Append one execution.
    fn record(
        &self,
        execution: RuleExecution,
    ) -> impl Future<Output = Result<RuleExecution, CaseDeskError>> + Send;

    /// Executions of one rule, newest first, at most `limit` entries.
    fn find_by_rule(
        &self,
        rule_id: &RuleId,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<RuleExecution>, CaseDeskError>> + Send;
}

impl<T: ExecutionLog + Send + Sync> ExecutionLog for std::sync::Arc<T> {
    fn record(
        &self,
        execution: RuleExecution,
    ) -> impl Future<Output = Result<RuleExecution, CaseDeskError>> + Send {
        (**self).record(execution)
    }

    fn find_by_rule(
        &self,
        rule_id: &RuleId,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<RuleExecution>, CaseDeskError>> + Send {
        (**self).find_by_rule(rule_id, limit)
    }
}
