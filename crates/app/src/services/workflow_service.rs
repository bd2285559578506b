//! Workflow service — use-cases for managing workflow rules.

use casedesk_domain::error::{CaseDeskError, NotFoundError};
use casedesk_domain::id::RuleId;
use casedesk_domain::workflow::{RuleDraft, RuleFilter, WorkflowRule, WorkflowRuleInput};

use crate::ports::RuleRepository;

/// Application service for workflow rule CRUD.
pub struct WorkflowService<R> {
    repo: R,
}

impl<R: RuleRepository> WorkflowService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a validated rule under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`CaseDeskError::Validation`] if invariants fail, or an
    /// error propagated from the repository.
    #[tracing::instrument(skip(self, input), fields(rule_name = %input.name))]
    pub async fn create_rule(&self, input: WorkflowRuleInput) -> Result<WorkflowRule, CaseDeskError> {
        input.validate()?;
        let rule = self.repo.add(input).await?;
        tracing::info!(rule_id = %rule.id, trigger = %rule.trigger, action = %rule.action, "workflow rule created");
        Ok(rule)
    }

    /// Run the validation gate on a draft and store the result.
    ///
    /// Nothing is stored when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`CaseDeskError::Validation`] for blank or unknown fields,
    /// or an error propagated from the repository.
    pub async fn create_from_draft(&self, draft: &RuleDraft) -> Result<WorkflowRule, CaseDeskError> {
        let input = draft.validate().inspect_err(|err| {
            tracing::debug!(error = %err, "workflow draft rejected");
        })?;
        self.create_rule(input).await
    }

    /// Replace the editable fields of rule `id`, keeping its id and position.
    ///
    /// # Errors
    ///
    /// Returns [`CaseDeskError::Validation`] if invariants fail,
    /// [`CaseDeskError::NotFound`] when no rule with `id` exists, or an error
    /// propagated from the repository.
    #[tracing::instrument(skip(self, input), fields(rule_name = %input.name))]
    pub async fn update_rule(
        &self,
        id: &RuleId,
        input: WorkflowRuleInput,
    ) -> Result<WorkflowRule, CaseDeskError> {
        input.validate()?;
        let rule = self.repo.update(id, input).await?.ok_or_else(|| {
            CaseDeskError::from(NotFoundError {
                entity: "WorkflowRule",
                id: id.to_string(),
            })
        })?;
        tracing::info!(enabled = rule.enabled, "workflow rule updated");
        Ok(rule)
    }

    /// Run the validation gate on a draft and apply it to rule `id`.
    ///
    /// The stored rule is untouched when validation fails.
    ///
    /// # Errors
    ///
    /// Same as [`update_rule`](Self::update_rule), plus validation errors
    /// from the draft.
    pub async fn update_from_draft(
        &self,
        id: &RuleId,
        draft: &RuleDraft,
    ) -> Result<WorkflowRule, CaseDeskError> {
        let input = draft.validate().inspect_err(|err| {
            tracing::debug!(error = %err, "workflow draft rejected");
        })?;
        self.update_rule(id, input).await
    }

    /// Insert rules that already carry ids, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first rule the repository refuses (e.g. duplicate id).
    #[tracing::instrument(skip_all, fields(count = rules.len()))]
    pub async fn seed(&self, rules: Vec<WorkflowRule>) -> Result<usize, CaseDeskError> {
        let mut inserted = 0;
        for rule in rules {
            self.repo.insert(rule).await?;
            inserted += 1;
        }
        tracing::info!(inserted, "workflow rules seeded");
        Ok(inserted)
    }

    /// Look up a rule by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CaseDeskError::NotFound`] when no rule with `id` exists,
    /// or an error from the repository.
    pub async fn get_rule(&self, id: &RuleId) -> Result<WorkflowRule, CaseDeskError> {
        self.repo.get(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "WorkflowRule",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all rules in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    pub async fn list_rules(&self) -> Result<Vec<WorkflowRule>, CaseDeskError> {
        self.repo.find(&RuleFilter::default()).await
    }

    /// List rules matching `filter`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    pub async fn find_rules(&self, filter: &RuleFilter) -> Result<Vec<WorkflowRule>, CaseDeskError> {
        self.repo.find(filter).await
    }

    /// Delete a rule by id.
    ///
    /// Deleting an unknown id is not an error; `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_rule(&self, id: &RuleId) -> Result<Option<WorkflowRule>, CaseDeskError> {
        let removed = self.repo.remove(id).await?;
        match &removed {
            Some(rule) => tracing::info!(rule_name = %rule.name, "workflow rule deleted"),
            None => tracing::debug!("workflow rule already absent"),
        }
        Ok(removed)
    }
}
