//! In-process notification bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use casedesk_domain::error::CaseDeskError;
use casedesk_domain::notification::Notification;

use crate::ports::NotificationPublisher;

/// In-process bus for in-app notifications using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the notification is simply dropped).
pub struct InProcessNotificationBus {
    sender: broadcast::Sender<Notification>,
}

impl InProcessNotificationBus {
    /// Create a new bus with the given channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; configuration rejects that value
    /// before the bus is built.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to notifications on this bus.
    ///
    /// Returns a receiver that will get all notifications published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl NotificationPublisher for InProcessNotificationBus {
    fn publish(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<(), CaseDeskError>> + Send {
        // send only fails when nobody is listening
        if self.sender.send(notification).is_err() {
            tracing::trace!("in-app notification dropped, no subscribers");
        }
        async { Ok(()) }
    }
}
