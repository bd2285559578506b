//! Server-Sent Events (SSE) stream of in-app notifications.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use casedesk_app::ports::{ExecutionLog, Notifier, RuleRepository};

use crate::state::AppState;

/// `GET /api/notifications/stream` — SSE stream of in-app notifications.
///
/// Subscribes to the notification bus and sends each notification as a
/// JSON `data:` frame with event name `notification`. The stream continues
/// until the client disconnects. A subscriber that falls behind the bus
/// capacity loses the oldest notifications.
pub async fn stream<R, N, E>(
    State(state): State<AppState<R, N, E>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>
where
    R: RuleRepository + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
    E: ExecutionLog + Send + Sync + 'static,
{
    let rx = state.notification_bus.subscribe();
    let notifications = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(notification) => match Event::default().event("notification").json_data(&notification) {
            Ok(event) => Some(Ok(event)),
            Err(err) => {
                tracing::warn!(%err, "failed to encode notification for SSE stream");
                None
            }
        },
        Err(BroadcastStreamRecvError::Lagged(n)) => {
            tracing::warn!(
                skipped = n,
                "SSE subscriber lagged, some notifications were dropped"
            );
            None
        }
    });

    Sse::new(notifications).keep_alive(KeepAlive::default())
}
