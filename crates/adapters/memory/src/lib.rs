//! # casedesk-adapter-memory
//!
//! Session-scoped storage for workflow rules and their execution history.
//!
//! ## Responsibilities
//! - Implement [`RuleRepository`] on top of the domain [`RuleStore`]
//! - Implement [`ExecutionLog`] as a bounded ring of [`RuleExecution`]s
//! - Serialize access from concurrent request handlers with a mutex
//!
//! Nothing is written to disk: restarting the daemon starts a new session.
//!
//! ## Dependency rule
//! Depends on `casedesk-app` (for port traits) and `casedesk-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod execution_log;

pub use execution_log::InMemoryExecutionLog;

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use casedesk_app::ports::RuleRepository;
use casedesk_domain::error::CaseDeskError;
use casedesk_domain::id::RuleId;
use casedesk_domain::workflow::{RuleFilter, RuleStore, WorkflowRule, WorkflowRuleInput};

/// In-memory rule repository.
///
/// The lock is never held across an `.await`: every operation completes
/// synchronously and hands back a ready future.
#[derive(Debug, Default)]
pub struct InMemoryRuleRepository {
    store: Mutex<RuleStore>,
}

impl InMemoryRuleRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rules currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave the store half-updated
    // (every mutation is a single Vec operation), so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, RuleStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RuleRepository for InMemoryRuleRepository {
    fn add(
        &self,
        input: WorkflowRuleInput,
    ) -> impl Future<Output = Result<WorkflowRule, CaseDeskError>> + Send {
        let rule = self.lock().add(input);
        tracing::trace!(rule_id = %rule.id, "rule stored");
        async { Ok(rule) }
    }

    fn insert(
        &self,
        rule: WorkflowRule,
    ) -> impl Future<Output = Result<WorkflowRule, CaseDeskError>> + Send {
        let result = self.lock().insert(rule).map_err(CaseDeskError::from);
        async { result }
    }

    fn update(
        &self,
        id: &RuleId,
        input: WorkflowRuleInput,
    ) -> impl Future<Output = Result<Option<WorkflowRule>, CaseDeskError>> + Send {
        let updated = self.lock().update(id, input);
        async { Ok(updated) }
    }

    fn remove(
        &self,
        id: &RuleId,
    ) -> impl Future<Output = Result<Option<WorkflowRule>, CaseDeskError>> + Send {
        let removed = self.lock().remove(id);
        async { Ok(removed) }
    }

    fn get(
        &self,
        id: &RuleId,
    ) -> impl Future<Output = Result<Option<WorkflowRule>, CaseDeskError>> + Send {
        let rule = self.lock().get(id).cloned();
        async { Ok(rule) }
    }

    fn find(
        &self,
        filter: &RuleFilter,
    ) -> impl Future<Output = Result<Vec<WorkflowRule>, CaseDeskError>> + Send {
        let rules = self.lock().find(filter);
        async { Ok(rules) }
    }
}
