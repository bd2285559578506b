//! JSON handler for sending a notification directly.

use axum::Json;
use axum::extract::State;

use casedesk_app::ports::{ExecutionLog, Notifier, RuleRepository};
use casedesk_domain::notification::{DispatchReceipt, Notification};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// `POST /api/notifications` — send one notification and return its receipt.
pub async fn send<R, N, E>(
    State(state): State<AppState<R, N, E>>,
    ApiJson(notification): ApiJson<Notification>,
) -> Result<Json<DispatchReceipt>, ApiError>
where
    R: RuleRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    E: ExecutionLog + Send + Sync + 'static,
{
    let receipt = state.notification_service.notify(notification).await?;
    Ok(Json(receipt))
}
