//! # casedesk-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for workflow rules (`/api/workflows`, …) and
//!   notifications (`/api/notifications`, …)
//! - Stream in-app notifications to browsers over **Server-Sent Events**
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors, including undecodable requests,
//!   into JSON HTTP responses
//!
//! ## Dependency rule
//! Depends on `casedesk-app` (for port traits and services) and `casedesk-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
