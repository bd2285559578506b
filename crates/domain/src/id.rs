//! Typed identifier newtypes.
//!
//! Notification receipts and execution records use random UUIDs. Workflow rules use a
//! session-scoped, timestamp-derived identifier (`wf-<millis>`) so that the
//! ids stay short and sort by creation time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Access the inner UUID.
            #[must_use]
            pub fn as_uuid(self) -> uuid::Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`DispatchReceipt`](crate::notification::DispatchReceipt).
    DispatchId
);

define_id!(
    /// Unique identifier for a [`RuleExecution`](crate::execution::RuleExecution).
    ExecutionId
);

const RULE_ID_PREFIX: &str = "wf-";

/// Identifier of a [`WorkflowRule`](crate::workflow::WorkflowRule).
///
/// Rendered as `wf-<n>`. Generated ids use the creation time in unix
/// milliseconds as `n`; seeded rules may use small numbers (`wf-1`).
/// Any non-empty string is accepted when parsing so that ids coming back
/// from clients are compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    /// Build the id for sequence value `n`.
    #[must_use]
    pub fn from_sequence(n: i64) -> Self {
        Self(format!("{RULE_ID_PREFIX}{n}"))
    }

    /// Numeric part of a `wf-<n>` id, if it has that shape.
    #[must_use]
    pub fn sequence(&self) -> Option<i64> {
        self.0.strip_prefix(RULE_ID_PREFIX)?.parse().ok()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RuleId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidId(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}
