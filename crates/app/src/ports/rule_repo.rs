//! Rule repository port — ownership of the session's rule set.

use std::future::Future;

use casedesk_domain::error::CaseDeskError;
use casedesk_domain::id::RuleId;
use casedesk_domain::workflow::{RuleFilter, WorkflowRule, WorkflowRuleInput};

/// Holds the ordered sequence of [`WorkflowRule`]s for one session.
///
/// Implementations must preserve insertion order and assign ids that are
/// never reused within the session.
pub trait RuleRepository {
    /// Store a validated rule under a freshly generated id.
    fn add(
        &self,
        input: WorkflowRuleInput,
    ) -> impl Future<Output = Result<WorkflowRule, CaseDeskError>> + Send;

    /// Store a rule that already carries an id.
    fn insert(
        &self,
        rule: WorkflowRule,
    ) -> impl Future<Output = Result<WorkflowRule, CaseDeskError>> + Send;

    /// Replace the editable fields of a stored rule, keeping its id and
    /// position. Unknown ids yield `None`.
    fn update(
        &self,
        id: &RuleId,
        input: WorkflowRuleInput,
    ) -> impl Future<Output = Result<Option<WorkflowRule>, CaseDeskError>> + Send;

    /// Remove a rule. Unknown ids are a no-op and yield `None`.
    fn remove(
        &self,
        id: &RuleId,
    ) -> impl Future<Output = Result<Option<WorkflowRule>, CaseDeskError>> + Send;

    fn get(
        &self,
        id: &RuleId,
    ) -> impl Future<Output = Result<Option<WorkflowRule>, CaseDeskError>> + Send;

    /// Rules matching `filter`, in insertion order.
    fn find(
        &self,
        filter: &RuleFilter,
    ) -> impl Future<Output = Result<Vec<WorkflowRule>, CaseDeskError>> + Send;
}

impl<T: RuleRepository + Send + Sync> RuleRepository for std::sync::Arc<T> {
    fn add(
        &self,
        input: WorkflowRuleInput,
    ) -> impl Future<Output = Result<WorkflowRule, CaseDeskError>> + Send {
        (**self).add(input)
    }

    fn insert(
        &self,
        rule: WorkflowRule,
    ) -> impl Future<Output = Result<WorkflowRule, CaseDeskError>> + Send {
        (**self).insert(rule)
    }

    fn update(
        &self,
        id: &RuleId,
        input: WorkflowRuleInput,
    ) -> impl Future<Output = Result<Option<WorkflowRule>, CaseDeskError>> + Send {
        (**self).update(id, input)
    }

    fn remove(
        &self,
        id: &RuleId,
    ) -> impl Future<Output = Result<Option<WorkflowRule>, CaseDeskError>> + Send {
        (**self).remove(id)
    }

    fn get(
        &self,
        id: &RuleId,
    ) -> impl Future<Output = Result<Option<WorkflowRule>, CaseDeskError>> + Send {
        (**self).get(id)
    }

    fn find(
        &self,
        filter: &RuleFilter,
    ) -> impl Future<Output = Result<Vec<WorkflowRule>, CaseDeskError>> + Send {
        (**self).find(filter)
    }
}
