//! Notification bus port — fan-out of in-app notifications.

use std::future::Future;

use casedesk_domain::error::CaseDeskError;
use casedesk_domain::notification::Notification;

/// Publishes in-app notifications to interested subscribers.
pub trait NotificationPublisher {
    /// Publish a notification to all current subscribers.
    fn publish(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<(), CaseDeskError>> + Send;
}

impl<T: NotificationPublisher + Send + Sync> NotificationPublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<(), CaseDeskError>> + Send {
        (**self).publish(notification)
    }
}
