//! Trigger — the case/task event that activates a workflow rule.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::event::TriggerEvent;

/// Describes which case or task event should activate a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// The status of a case changed.
    CaseStatusChange,
    /// The status of a task changed.
    TaskStatusChange,
    /// A new case was opened.
    NewCaseCreated,
    /// A task's due date is coming up.
    TaskDueApproaching,
}

impl Trigger {
    /// Every trigger, in the order offered to users.
    pub const ALL: [Self; 4] = [
        Self::CaseStatusChange,
        Self::TaskStatusChange,
        Self::NewCaseCreated,
        Self::TaskDueApproaching,
    ];

    /// Human-readable label shown in forms and listings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CaseStatusChange => "Case Status Change",
            Self::TaskStatusChange => "Task Status Change",
            Self::NewCaseCreated => "New Case Created",
            Self::TaskDueApproaching => "Task Due Date Approaching",
        }
    }

    /// Machine tag used on the wire.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::CaseStatusChange => "case_status_change",
            Self::TaskStatusChange => "task_status_change",
            Self::NewCaseCreated => "new_case_created",
            Self::TaskDueApproaching => "task_due_approaching",
        }
    }

    /// Check whether this trigger is activated by the given event.
    ///
    /// Only the event kind is compared; rule conditions are free text and
    /// take no part in matching.
    #[must_use]
    pub fn matches_event(self, event: &TriggerEvent) -> bool {
        self == event.trigger
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Trigger {
    type Err = ValidationError;

    /// Accepts either the wire tag or the display label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.tag() == needle || t.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::UnknownTrigger(needle.to_string()))
    }
}
