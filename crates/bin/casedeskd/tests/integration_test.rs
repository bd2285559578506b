//! End-to-end smoke tests for the full casedeskd stack.
//!
//! Each test spins up the complete application (in-memory rule repository,
//! simulated notifier, real services, real axum router) and exercises the
//! HTTP layer via `tower::ServiceExt::oneshot`. No TCP port is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use casedesk_adapter_http_axum::router;
use casedesk_adapter_http_axum::state::AppState;
use casedesk_adapter_memory::{InMemoryExecutionLog, InMemoryRuleRepository};
use casedesk_adapter_simulated::SimulatedNotifier;
use casedesk_app::notification_bus::InProcessNotificationBus;
use casedesk_app::seed::example_rules;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router that starts with the two example rules.
async fn app() -> axum::Router {
    let state = AppState::new(
        InMemoryRuleRepository::new(),
        SimulatedNotifier::new(),
        InMemoryExecutionLog::new(),
        Arc::new(InProcessNotificationBus::new(64)),
    );
    state
        .workflow_service
        .seed(example_rules())
        .await
        .expect("example rules should seed");
    router::build(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(resp: axum::response::Response) -> Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

async fn rule_ids(app: &axum::Router) -> Vec<String> {
    let resp = app.clone().oneshot(get("/api/workflows")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    json_body(resp)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

fn high_priority_draft() -> Value {
    json!({
        "name": "Notify on High Priority Case",
        "trigger": "Case Status Change",
        "condition": "Status is 'High Priority'",
        "action": "In-App Notification",
        "action_detail": "New high priority case created: {{case.title}}"
    })
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().await.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Workflow rules
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_seeded_rules_in_order() {
    let app = app().await;
    assert_eq!(rule_ids(&app).await, vec!["wf-1", "wf-2"]);
}

#[tokio::test]
async fn should_append_created_rule_with_fresh_id() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(post("/api/workflows", &high_priority_draft()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = json_body(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let ids = rule_ids(&app).await;
    assert_eq!(ids.len(), 3);
    assert_eq!(ids[2], id);
    assert!(!["wf-1", "wf-2"].contains(&id.as_str()));
}

#[tokio::test]
async fn should_create_two_distinct_rules_from_identical_drafts() {
    let app = app().await;

    let first = json_body(
        app.clone()
            .oneshot(post("/api/workflows", &high_priority_draft()))
            .await
            .unwrap(),
    )
    .await;
    let second = json_body(
        app.clone()
            .oneshot(post("/api/workflows", &high_priority_draft()))
            .await
            .unwrap(),
    )
    .await;

    assert_ne!(first["id"], second["id"]);
    for field in ["name", "trigger", "condition", "action", "action_detail"] {
        assert_eq!(first[field], second[field]);
    }
}

#[tokio::test]
async fn should_leave_rules_unchanged_when_draft_is_incomplete() {
    let app = app().await;

    for field in ["name", "trigger", "action"] {
        let mut draft = high_priority_draft();
        draft[field] = json!("");
        let resp = app
            .clone()
            .oneshot(post("/api/workflows", &draft))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    assert_eq!(rule_ids(&app).await, vec!["wf-1", "wf-2"]);
}

#[tokio::test]
async fn should_ignore_delete_of_unknown_rule() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(delete("/api/workflows/wf-999"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(rule_ids(&app).await, vec!["wf-1", "wf-2"]);
}

#[tokio::test]
async fn should_keep_remaining_order_after_deleting_middle_rule() {
    let app = app().await;
    let created = json_body(
        app.clone()
            .oneshot(post("/api/workflows", &high_priority_draft()))
            .await
            .unwrap(),
    )
    .await;

    let resp = app
        .clone()
        .oneshot(delete("/api/workflows/wf-2"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let ids = rule_ids(&app).await;
    assert_eq!(ids, vec!["wf-1", created["id"].as_str().unwrap()]);

    let resp = app.oneshot(get("/api/workflows/wf-2")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_answer_blank_delete_and_bad_body_without_touching_rules() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(delete("/api/workflows/%20"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(post("/api/workflows", &json!({"name": 5})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp.headers()["content-type"], "application/json");
    assert!(json_body(resp).await["error"].is_string());

    assert_eq!(rule_ids(&app).await, vec!["wf-1", "wf-2"]);
}

#[tokio::test]
async fn should_pause_rule_and_record_only_live_executions() {
    let app = app().await;
    let fire = || {
        post(
            "/api/workflows/fire",
            &json!({
                "trigger": "case_status_change",
                "target": "dana",
                "context": {"case": {"title": "Server down"}}
            }),
        )
    };

    let resp = app.clone().oneshot(fire()).await.unwrap();
    assert_eq!(json_body(resp).await["outcomes"].as_array().unwrap().len(), 1);

    let mut paused = high_priority_draft();
    paused["enabled"] = json!(false);
    let resp = app
        .clone()
        .oneshot(put("/api/workflows/wf-1", &paused))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(rule_ids(&app).await, vec!["wf-1", "wf-2"]);

    let resp = app.clone().oneshot(fire()).await.unwrap();
    assert!(json_body(resp).await["outcomes"].as_array().unwrap().is_empty());

    let resp = app
        .oneshot(get("/api/workflows/wf-1/executions"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let history = json_body(resp).await;
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0]["status"], "dispatched");
    assert_eq!(history[0]["rule_id"], "wf-1");
}

#[tokio::test]
async fn should_search_rules_by_name() {
    let app = app().await;
    let resp = app
        .oneshot(get("/api/workflows?q=assignee"))
        .await
        .unwrap();

    let body = json_body(resp).await;
    let rules = body.as_array().unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0]["name"], "Email Assignee on Task Completion");
}

// ---------------------------------------------------------------------------
// Firing and notifications
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_dispatch_single_in_app_notification_for_case_status_change() {
    let app = app().await;

    let resp = app
        .oneshot(post(
            "/api/workflows/fire",
            &json!({
                "trigger": "case_status_change",
                "target": "dana",
                "context": {"case": {"title": "Server down"}}
            }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let report = json_body(resp).await;
    let outcomes = report["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0]["rule_id"], "wf-1");
    assert_eq!(outcomes[0]["condition"], "Status is 'High Priority'");
    assert_eq!(outcomes[0]["receipt"]["kind"], "in_app");
    assert_eq!(
        outcomes[0]["receipt"]["acknowledgement"],
        "New Notification: New high priority case created: Server down"
    );
}

#[tokio::test]
async fn should_email_assignee_with_rule_name_as_subject() {
    let app = app().await;

    let resp = app
        .oneshot(post(
            "/api/workflows/fire",
            &json!({
                "trigger": "task_status_change",
                "target": "amy@example.com",
                "context": {"task": {"title": "Call client", "assignee": "Amy"}}
            }),
        ))
        .await
        .unwrap();

    let report = json_body(resp).await;
    assert_eq!(
        report["outcomes"][0]["receipt"]["acknowledgement"],
        "Email to amy@example.com with subject \"Email Assignee on Task Completion\" has been simulated."
    );
}

#[tokio::test]
async fn should_reject_fire_with_blank_target() {
    let app = app().await;
    let resp = app
        .oneshot(post(
            "/api/workflows/fire",
            &json!({"trigger": "new_case_created", "target": ""}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_send_direct_call_notification() {
    let app = app().await;
    let resp = app
        .oneshot(post(
            "/api/notifications",
            &json!({"kind": "call", "target": "+15550100", "message": "Case overdue"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let receipt = json_body(resp).await;
    assert_eq!(receipt["acknowledgement"], "Call to +15550100 has been simulated.");
}
