//! # casedesk-domain
//!
//! Pure domain model for the casedesk workflow rule service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Workflow rules** (trigger → condition → action mappings)
//! - Define the **Rule draft** validation gate and the ordered **Rule store**
//! - Define **Trigger events** (case/task changes rules react to)
//! - Define **Notifications**, dispatch receipts and dispatch reports
//! - Define **Rule executions**, the per-rule history of fired events
//! - Render **action-detail templates** with `{{variable}}` placeholders
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod dispatch;
pub mod event;
pub mod execution;
pub mod notification;
pub mod template;
pub mod workflow;
