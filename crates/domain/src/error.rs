//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CaseDeskError`] via `#[from]` so that ports can share a single
//! result type.

use crate::template::TemplateError;

/// Base error for every fallible operation crossing a port boundary.
#[derive(Debug, thiserror::Error)]
pub enum CaseDeskError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("template error")]
    Template(#[from] TemplateError),

    /// A notifier implementation failed to hand the notification over.
    #[error("dispatch error")]
    Dispatch(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated by user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("a trigger event must be selected")]
    MissingTrigger,

    #[error("an action must be selected")]
    MissingAction,

    #[error("unknown trigger event: {0}")]
    UnknownTrigger(String),

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("notification target must not be empty")]
    EmptyTarget,

    #[error("a workflow rule with id {0} already exists")]
    DuplicateId(String),

    #[error("invalid workflow rule id: {0}")]
    InvalidId(String),
}

impl ValidationError {
    /// Whether the error comes from a required field being left blank.
    ///
    /// The editor surfaces these as a single "missing information" message.
    #[must_use]
    pub fn is_missing_field(&self) -> bool {
        matches!(
            self,
            Self::EmptyName | Self::MissingTrigger | Self::MissingAction
        )
    }
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
