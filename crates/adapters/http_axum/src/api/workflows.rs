//! JSON handlers for workflow rules.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use casedesk_app::ports::{ExecutionLog, Notifier, RuleRepository};
use casedesk_domain::dispatch::DispatchReport;
use casedesk_domain::error::CaseDeskError;
use casedesk_domain::event::TriggerEvent;
use casedesk_domain::execution::RuleExecution;
use casedesk_domain::id::RuleId;
use casedesk_domain::workflow::{ActionKind, RuleDraft, RuleFilter, Trigger, WorkflowRule};

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::state::AppState;

const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Query string accepted by the list endpoint.
///
/// `trigger` and `action` take either a tag (`case_status_change`) or a
/// display label (`Case Status Change`); `q` matches rule names
/// case-insensitively.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub trigger: Option<String>,
    pub action: Option<String>,
    pub enabled: Option<bool>,
    pub q: Option<String>,
}

impl ListQuery {
    fn into_filter(self) -> Result<RuleFilter, CaseDeskError> {
        Ok(RuleFilter {
            trigger: self
                .trigger
                .filter(|t| !t.trim().is_empty())
                .map(|t| Trigger::from_str(&t))
                .transpose()?,
            action: self
                .action
                .filter(|a| !a.trim().is_empty())
                .map(|a| ActionKind::from_str(&a))
                .transpose()?,
            enabled: self.enabled,
            name_contains: self.q.filter(|q| !q.trim().is_empty()),
        })
    }
}

/// Query string accepted by the execution history endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

/// One selectable option in the rule form.
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub tag: &'static str,
    pub label: &'static str,
}

/// Everything a client needs to render the rule form.
#[derive(Debug, Serialize)]
pub struct Catalog {
    pub triggers: Vec<CatalogEntry>,
    pub actions: Vec<CatalogEntry>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<WorkflowRule>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<WorkflowRule>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<WorkflowRule>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/workflows` — list rules in insertion order, optionally filtered.
pub async fn list<R, N, E>(
    State(state): State<AppState<R, N, E>>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    R: RuleRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    E: ExecutionLog + Send + Sync + 'static,
{
    let filter = query.into_filter()?;
    let rules = state.workflow_service.find_rules(&filter).await?;
    Ok(ListResponse::Ok(Json(rules)))
}

/// `GET /api/workflows/{id}` — get a rule by id.
pub async fn get<R, N, E>(
    State(state): State<AppState<R, N, E>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: RuleRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    E: ExecutionLog + Send + Sync + 'static,
{
    let rule_id = RuleId::from_str(&id).map_err(CaseDeskError::from)?;
    let rule = state.workflow_service.get_rule(&rule_id).await?;
    Ok(GetResponse::Ok(Json(rule)))
}

/// `POST /api/workflows` — create a rule from a draft.
///
/// Runs the same validation gate as the rule editor; nothing is stored when
/// it fails.
pub async fn create<R, N, E>(
    State(state): State<AppState<R, N, E>>,
    ApiJson(draft): ApiJson<RuleDraft>,
) -> Result<CreateResponse, ApiError>
where
    R: RuleRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    E: ExecutionLog + Send + Sync + 'static,
{
    let created = state.workflow_service.create_from_draft(&draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/workflows/{id}` — replace a rule from a draft, keeping its id.
///
/// Runs the same validation gate as create; the stored rule is untouched
/// when it fails.
pub async fn update<R, N, E>(
    State(state): State<AppState<R, N, E>>,
    Path(id): Path<String>,
    ApiJson(draft): ApiJson<RuleDraft>,
) -> Result<GetResponse, ApiError>
where
    R: RuleRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    E: ExecutionLog + Send + Sync + 'static,
{
    let rule_id = RuleId::from_str(&id).map_err(CaseDeskError::from)?;
    let rule = state
        .workflow_service
        .update_from_draft(&rule_id, &draft)
        .await?;
    Ok(GetResponse::Ok(Json(rule)))
}

/// `DELETE /api/workflows/{id}` — delete a rule. Unknown ids are a no-op.
pub async fn delete<R, N, E>(
    State(state): State<AppState<R, N, E>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: RuleRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    E: ExecutionLog + Send + Sync + 'static,
{
    // A blank id cannot name a stored rule.
    let Ok(rule_id) = RuleId::from_str(&id) else {
        return Ok(DeleteResponse::NoContent);
    };
    state.workflow_service.delete_rule(&rule_id).await?;
    Ok(DeleteResponse::NoContent)
}

/// `POST /api/workflows/fire` — fire a trigger event against the rules.
pub async fn fire<R, N, E>(
    State(state): State<AppState<R, N, E>>,
    ApiJson(event): ApiJson<TriggerEvent>,
) -> Result<Json<DispatchReport>, ApiError>
where
    R: RuleRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    E: ExecutionLog + Send + Sync + 'static,
{
    let report = state.dispatcher.fire(event).await?;
    Ok(Json(report))
}

/// `GET /api/workflows/{id}/executions` — execution history, newest first.
pub async fn executions<R, N, E>(
    State(state): State<AppState<R, N, E>>,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<HistoryQuery>,
) -> Result<Json<Vec<RuleExecution>>, ApiError>
where
    R: RuleRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    E: ExecutionLog + Send + Sync + 'static,
{
    let rule_id = RuleId::from_str(&id).map_err(CaseDeskError::from)?;
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let history = state.dispatcher.executions(&rule_id, limit).await?;
    Ok(Json(history))
}

/// `GET /api/workflows/catalog` — available triggers and actions.
pub async fn catalog() -> Json<Catalog> {
    Json(Catalog {
        triggers: Trigger::ALL
            .iter()
            .map(|t| CatalogEntry {
                tag: t.tag(),
                label: t.label(),
            })
            .collect(),
        actions: ActionKind::ALL
            .iter()
            .map(|a| CatalogEntry {
                tag: a.tag(),
                label: a.label(),
            })
            .collect(),
    })
}
