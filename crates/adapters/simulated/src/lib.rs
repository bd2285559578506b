//! # casedesk-adapter-simulated
//!
//! Simulated delivery channels for demonstration and testing.
//!
//! ## Channels
//!
//! | Kind | Log tag | Acknowledgement |
//! |------|---------|-----------------|
//! | email | `[EMAIL]` | `Email to {to} with subject "{subject}" has been simulated.` |
//! | sms | `[SMS]` | `SMS to {to} has been simulated.` |
//! | call | `[CALL]` | `Call to {to} has been simulated.` |
//! | in-app | `[IN-APP]` | `New Notification: {message}` |
//!
//! Nothing leaves the process; every receipt has `simulated = true`.
//!
//! ## Dependency rule
//!
//! Depends on `casedesk-app` (port traits) and `casedesk-domain` only.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use casedesk_app::ports::Notifier;
use casedesk_domain::error::CaseDeskError;
use casedesk_domain::id::DispatchId;
use casedesk_domain::notification::{DispatchReceipt, Notification, NotificationKind};
use casedesk_domain::time::now;

/// Notifier that logs each notification and acknowledges it locally.
#[derive(Debug, Default)]
pub struct SimulatedNotifier {
    dispatched: AtomicU64,
}

impl SimulatedNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications accepted since startup.
    #[must_use]
    pub fn dispatched_count(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    fn log(notification: &Notification) {
        let target = notification.target.as_str();
        match notification.kind {
            NotificationKind::Email => tracing::info!(
                to = target,
                subject = notification.subject.as_deref().unwrap_or_default(),
                body = notification.message.as_str(),
                "[EMAIL] simulated send"
            ),
            NotificationKind::Sms => tracing::info!(
                to = target,
                message = notification.message.as_str(),
                "[SMS] simulated send"
            ),
            NotificationKind::Call => tracing::info!(
                to = target,
                message = notification.message.as_str(),
                "[CALL] simulated call"
            ),
            NotificationKind::InApp => tracing::info!(
                user = target,
                message = notification.message.as_str(),
                "[IN-APP] notification raised"
            ),
        }
    }
}

impl Notifier for SimulatedNotifier {
    fn notify(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<DispatchReceipt, CaseDeskError>> + Send {
        Self::log(&notification);
        self.dispatched.fetch_add(1, Ordering::Relaxed);

        let receipt = DispatchReceipt {
            id: DispatchId::new(),
            kind: notification.kind,
            acknowledgement: notification.simulated_acknowledgement(),
            target: notification.target,
            simulated: true,
            dispatched_at: now(),
        };
        async { Ok(receipt) }
    }
}
