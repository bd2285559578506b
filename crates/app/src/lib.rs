//! # casedesk-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RuleRepository` — session-scoped storage for workflow rules
//!   - `Notifier` — hands a notification to a delivery channel
//!   - `NotificationPublisher` — fans in-app notifications out to listeners
//!   - `ExecutionLog` — per-rule history of fired events
//! - Define **driving/inbound ports** as use-case structs:
//!   - `WorkflowService` — create and update (through the validation gate), list, get, delete
//!   - `RuleEditor` — the draft a user is filling in, reset after a successful submit
//!   - `NotificationService` — validate and send one notification
//!   - `RuleDispatcher` — fire a trigger event against the enabled rules and
//!     record what each rule did
//! - Provide **in-process infrastructure** (notification bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `casedesk-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod dispatcher;
pub mod editor;
pub mod notification_bus;
pub mod ports;
pub mod seed;
pub mod services;

#[cfg(test)]
mod testing;
