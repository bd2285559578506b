//! Shared application state for axum handlers.

use std::sync::Arc;

use casedesk_app::dispatcher::RuleDispatcher;
use casedesk_app::notification_bus::InProcessNotificationBus;
use casedesk_app::ports::{ExecutionLog, Notifier, RuleRepository};
use casedesk_app::services::notification_service::NotificationService;
use casedesk_app::services::workflow_service::WorkflowService;

/// Notification service as wired into the HTTP layer.
pub type SharedNotificationService<N> = NotificationService<N, Arc<InProcessNotificationBus>>;

/// Application state shared across all axum handlers.
///
/// Generic over the rule repository, the notifier and the execution log to
/// avoid dynamic dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<R, N, E> {
    /// Workflow rule CRUD service.
    pub workflow_service: Arc<WorkflowService<Arc<R>>>,
    /// Direct notification sending.
    pub notification_service: Arc<SharedNotificationService<N>>,
    /// Fires trigger events against the stored rules.
    pub dispatcher: Arc<RuleDispatcher<Arc<R>, N, Arc<InProcessNotificationBus>, E>>,
    /// Bus the SSE stream subscribes to.
    pub notification_bus: Arc<InProcessNotificationBus>,
}

impl<R, N, E> Clone for AppState<R, N, E> {
    fn clone(&self) -> Self {
        Self {
            workflow_service: Arc::clone(&self.workflow_service),
            notification_service: Arc::clone(&self.notification_service),
            dispatcher: Arc::clone(&self.dispatcher),
            notification_bus: Arc::clone(&self.notification_bus),
        }
    }
}

impl<R, N, E> AppState<R, N, E>
where
    R: RuleRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    E: ExecutionLog + Send + Sync + 'static,
{
    /// Wire the services around one repository, one notifier, one execution
    /// log and one bus.
    ///
    /// The workflow service and the dispatcher share the same repository,
    /// so rules created over HTTP are immediately visible when firing.
    pub fn new(
        repo: R,
        notifier: N,
        execution_log: E,
        notification_bus: Arc<InProcessNotificationBus>,
    ) -> Self {
        let repo = Arc::new(repo);
        let notification_service = Arc::new(NotificationService::new(
            notifier,
            Arc::clone(&notification_bus),
        ));
        Self {
            workflow_service: Arc::new(WorkflowService::new(Arc::clone(&repo))),
            dispatcher: Arc::new(RuleDispatcher::new(
                repo,
                Arc::clone(&notification_service),
                execution_log,
            )),
            notification_service,
            notification_bus,
        }
    }
}
