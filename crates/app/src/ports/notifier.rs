//! Notifier port — hand a notification to a delivery channel.
//!
//! Real delivery (mail relay, SMS gateway, voice API) lives outside this
//! system. Adapters implement [`Notifier`] either by talking to such a
//! service or by simulating the hand-over.

use std::future::Future;

use casedesk_domain::error::CaseDeskError;
use casedesk_domain::notification::{DispatchReceipt, Notification};

/// Delivers [`Notification`]s over in-app, email, SMS or call channels.
pub trait Notifier {
    /// Hand over one notification.
    ///
    /// There is no retry and no delivery confirmation: a receipt means the
    /// channel accepted the notification, nothing more.
    fn notify(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<DispatchReceipt, CaseDeskError>> + Send;
}

impl<T: Notifier + Send + Sync> Notifier for std::sync::Arc<T> {
    fn notify(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<DispatchReceipt, CaseDeskError>> + Send {
        (**self).notify(notification)
    }
}
