//! Rule dispatcher — turns trigger events into notifications.
//!
//! For every enabled rule whose trigger matches the event, the rule's action
//! detail is rendered against the event context and sent through the
//! [`NotificationService`] on the channel the rule's action names. Rule
//! conditions are free text: they are carried into the report verbatim and
//! never evaluated. Every outcome is appended to the [`ExecutionLog`].

use std::sync::Arc;

use casedesk_domain::dispatch::{DispatchReport, OutcomeStatus, RuleOutcome};
use casedesk_domain::error::{CaseDeskError, NotFoundError};
use casedesk_domain::event::TriggerEvent;
use casedesk_domain::execution::RuleExecution;
use casedesk_domain::id::RuleId;
use casedesk_domain::notification::Notification;
use casedesk_domain::template;
use casedesk_domain::workflow::{RuleFilter, WorkflowRule};

use crate::ports::{ExecutionLog, NotificationPublisher, Notifier, RuleRepository};
use crate::services::notification_service::NotificationService;

/// Fires trigger events against the rule set.
pub struct RuleDispatcher<R, N, P, E> {
    repo: R,
    notifications: Arc<NotificationService<N, P>>,
    log: E,
}

impl<R, N, P, E> RuleDispatcher<R, N, P, E>
where
    R: RuleRepository,
    N: Notifier,
    P: NotificationPublisher,
    E: ExecutionLog,
{
    /// Create a new dispatcher.
    pub fn new(repo: R, notifications: Arc<NotificationService<N, P>>, log: E) -> Self {
        Self {
            repo,
            notifications,
            log,
        }
    }

    /// Fire one event.
    ///
    /// Matching enabled rules are handled in rule order. A rule whose
    /// template cannot be rendered is reported as skipped, and a rule whose
    /// notification the notifier refuses is reported as failed. Neither
    /// stops the remaining rules, so the report always lists what was
    /// already sent.
    ///
    /// # Errors
    ///
    /// Returns [`CaseDeskError::Validation`] for a blank target, or an error
    /// from the repository.
    #[tracing::instrument(skip(self, event), fields(trigger = %event.trigger))]
    pub async fn fire(&self, event: TriggerEvent) -> Result<DispatchReport, CaseDeskError> {
        event.validate()?;

        let filter = RuleFilter {
            trigger: Some(event.trigger),
            enabled: Some(true),
            ..RuleFilter::default()
        };
        let rules = self.repo.find(&filter).await?;
        let mut report = DispatchReport::new(event.trigger);

        for rule in rules.iter().filter(|r| r.trigger.matches_event(&event)) {
            let status = match render_notification(rule, &event) {
                Ok(notification) => match self.notifications.notify(notification).await {
                    Ok(receipt) => OutcomeStatus::Dispatched { receipt },
                    Err(err) => {
                        let error = describe(&err);
                        tracing::error!(rule_id = %rule.id, %error, "notification refused");
                        OutcomeStatus::Failed { error }
                    }
                },
                Err(err) => {
                    tracing::warn!(rule_id = %rule.id, error = %err, "skipping rule");
                    OutcomeStatus::Skipped {
                        reason: err.to_string(),
                    }
                }
            };
            let outcome = RuleOutcome {
                rule_id: rule.id.clone(),
                rule_name: rule.name.clone(),
                condition: rule.condition.clone(),
                status,
            };
            if let Err(err) = self.log.record(RuleExecution::record(&event, &outcome)).await {
                tracing::warn!(rule_id = %rule.id, error = %err, "failed to record rule execution");
            }
            report.outcomes.push(outcome);
        }

        tracing::info!(
            matched = report.outcomes.len(),
            dispatched = report.dispatched(),
            failed = report.failed(),
            "trigger event fired"
        );
        Ok(report)
    }

    /// Execution history of one rule, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`CaseDeskError::NotFound`] when no rule with `id` exists, or
    /// an error from the repository or the log.
    pub async fn executions(
        &self,
        id: &RuleId,
        limit: usize,
    ) -> Result<Vec<RuleExecution>, CaseDeskError> {
        if self.repo.get(id).await?.is_none() {
            return Err(NotFoundError {
                entity: "WorkflowRule",
                id: id.to_string(),
            }
            .into());
        }
        self.log.find_by_rule(id, limit).await
    }
}

/// Build the notification a rule sends for `event`.
///
/// A blank action detail falls back to the rule name; the subject is always
/// the rule name.
fn render_notification(
    rule: &WorkflowRule,
    event: &TriggerEvent,
) -> Result<Notification, template::TemplateError> {
    let message = if rule.action_detail.trim().is_empty() {
        rule.name.clone()
    } else {
        template::render(&rule.action_detail, &event.context)?
    };
    Ok(
        Notification::new(rule.action.notification_kind(), event.target.clone(), message)
            .with_subject(rule.name.clone()),
    )
}

fn describe(err: &CaseDeskError) -> String {
    match std::error::Error::source(err) {
        Some(source) => format!("{err}: {source}"),
        None => err.to_string(),
    }
}
