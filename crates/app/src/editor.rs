//! Rule editor — the form state behind "create a workflow rule".

use casedesk_domain::error::CaseDeskError;
use casedesk_domain::workflow::{RuleDraft, WorkflowRule};

use crate::ports::RuleRepository;
use crate::services::workflow_service::WorkflowService;

/// Holds one in-progress [`RuleDraft`] and submits it through the
/// validation gate.
///
/// A successful submit clears the draft. A rejected one leaves it exactly as
/// it was so the caller can fix the offending field and try again.
#[derive(Debug, Default, Clone)]
pub struct RuleEditor {
    draft: RuleDraft,
}

impl RuleEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing draft, e.g. one received over the wire.
    #[must_use]
    pub fn with_draft(draft: RuleDraft) -> Self {
        Self { draft }
    }

    #[must_use]
    pub fn draft(&self) -> &RuleDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut RuleDraft {
        &mut self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_trigger(&mut self, trigger: impl Into<String>) {
        self.draft.trigger = trigger.into();
    }

    pub fn set_condition(&mut self, condition: impl Into<String>) {
        self.draft.condition = condition.into();
    }

    pub fn set_action(&mut self, action: impl Into<String>) {
        self.draft.action = action.into();
    }

    pub fn set_action_detail(&mut self, detail: impl Into<String>) {
        self.draft.action_detail = detail.into();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.draft.enabled = enabled;
    }

    /// Discard every field of the draft.
    pub fn reset(&mut self) {
        self.draft.clear();
    }

    /// Validate the draft and store it as a new rule.
    ///
    /// # Errors
    ///
    /// Returns [`CaseDeskError::Validation`] when a required field is
    /// blank or unknown; the draft is kept untouched in that case.
    pub async fn submit<R: RuleRepository>(
        &mut self,
        workflows: &WorkflowService<R>,
    ) -> Result<WorkflowRule, CaseDeskError> {
        let rule = workflows.create_from_draft(&self.draft).await?;
        self.draft.clear();
        Ok(rule)
    }
}
