//! Wiring — builds the router from configuration.

use std::sync::Arc;

use casedesk_adapter_http_axum::router;
use casedesk_adapter_http_axum::state::AppState;
use casedesk_adapter_memory::{InMemoryExecutionLog, InMemoryRuleRepository};
use casedesk_adapter_simulated::SimulatedNotifier;
use casedesk_app::notification_bus::InProcessNotificationBus;
use casedesk_app::seed::example_rules;
use casedesk_domain::error::CaseDeskError;

use crate::config::Config;

/// Construct adapters, services and the HTTP router for one session.
///
/// # Errors
///
/// Returns an error if seeding the example rules fails.
pub async fn build(config: &Config) -> Result<axum::Router, CaseDeskError> {
    let bus = Arc::new(InProcessNotificationBus::new(
        config.notifications.bus_capacity,
    ));
    let state = AppState::new(
        InMemoryRuleRepository::new(),
        SimulatedNotifier::new(),
        InMemoryExecutionLog::with_capacity(config.workflow.history_limit),
        bus,
    );

    if config.workflow.seed_examples {
        state.workflow_service.seed(example_rules()).await?;
    }

    Ok(router::build(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn rule_ids(app: axum::Router) -> Vec<String> {
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/workflows")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap();
        body.as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn should_start_with_example_rules_by_default() {
        let app = build(&Config::default()).await.unwrap();
        assert_eq!(rule_ids(app).await, vec!["wf-1", "wf-2"]);
    }

    #[tokio::test]
    async fn should_start_empty_when_seeding_disabled() {
        let mut config = Config::default();
        config.workflow.seed_examples = false;
        let app = build(&config).await.unwrap();
        assert!(rule_ids(app).await.is_empty());
    }
}
