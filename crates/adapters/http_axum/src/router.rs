//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use casedesk_app::ports::{ExecutionLog, Notifier, RuleRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and includes a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<R, N, E>(state: AppState<R, N, E>) -> Router
where
    R: RuleRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    E: ExecutionLog + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use casedesk_adapter_memory::{InMemoryExecutionLog, InMemoryRuleRepository};
    use casedesk_adapter_simulated::SimulatedNotifier;
    use casedesk_app::notification_bus::InProcessNotificationBus;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    pub(crate) type TestState =
        AppState<InMemoryRuleRepository, SimulatedNotifier, InMemoryExecutionLog>;

    pub(crate) fn test_state() -> TestState {
        AppState::new(
            InMemoryRuleRepository::new(),
            SimulatedNotifier::new(),
            InMemoryExecutionLog::new(),
            Arc::new(InProcessNotificationBus::new(16)),
        )
    }

    pub(crate) fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub(crate) async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_route() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
