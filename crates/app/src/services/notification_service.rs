//! Notification service — the single entry point for sending notifications.

use casedesk_domain::error::CaseDeskError;
use casedesk_domain::notification::{DispatchReceipt, Notification, NotificationKind};

use crate::ports::{NotificationPublisher, Notifier};

/// Validates notifications, hands them to the [`Notifier`] and fans
/// in-app notifications out on the notification bus.
pub struct NotificationService<N, P> {
    notifier: N,
    publisher: P,
}

impl<N, P> NotificationService<N, P>
where
    N: Notifier,
    P: NotificationPublisher,
{
    /// Create a new service from a notifier and a bus publisher.
    pub fn new(notifier: N, publisher: P) -> Self {
        Self {
            notifier,
            publisher,
        }
    }

    /// Send one notification.
    ///
    /// Bus publication is best-effort: a failure there is logged and does
    /// not fail the call once the notifier has accepted the notification.
    ///
    /// # Errors
    ///
    /// Returns [`CaseDeskError::Validation`] for a blank target, or the
    /// notifier's error.
    #[tracing::instrument(skip(self, notification), fields(kind = %notification.kind, target = %notification.target))]
    pub async fn notify(&self, notification: Notification) -> Result<DispatchReceipt, CaseDeskError> {
        notification.validate()?;

        let in_app = (notification.kind == NotificationKind::InApp).then(|| notification.clone());
        let receipt = self.notifier.notify(notification).await?;

        if let Some(in_app) = in_app
            && let Err(err) = self.publisher.publish(in_app).await
        {
            tracing::warn!(error = %err, "failed to publish in-app notification");
        }

        tracing::debug!(dispatch_id = %receipt.id, "notification dispatched");
        Ok(receipt)
    }
}
