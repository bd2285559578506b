//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod notifications;
pub mod sse;
#[allow(clippy::missing_errors_doc)]
pub mod workflows;

use axum::Router;
use axum::routing::{get, post};

use casedesk_app::ports::{ExecutionLog, Notifier, RuleRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R, N, E>() -> Router<AppState<R, N, E>>
where
    R: RuleRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    E: ExecutionLog + Send + Sync + 'static,
{
    Router::new()
        // Workflow rules
        .route(
            "/workflows",
            get(workflows::list::<R, N, E>).post(workflows::create::<R, N, E>),
        )
        .route("/workflows/catalog", get(workflows::catalog))
        .route("/workflows/fire", post(workflows::fire::<R, N, E>))
        .route(
            "/workflows/{id}",
            get(workflows::get::<R, N, E>)
                .put(workflows::update::<R, N, E>)
                .delete(workflows::delete::<R, N, E>),
        )
        .route(
            "/workflows/{id}/executions",
            get(workflows::executions::<R, N, E>),
        )
        // Notifications
        .route("/notifications", post(notifications::send::<R, N, E>))
        .route("/notifications/stream", get(sse::stream::<R, N, E>))
}
