//! Session events - events that trigger state transitions.

use serde::{Deserialize, Serialize};

/// Events that can trigger session state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEvent {
    /// A validated, non-empty query was accepted for submission.
    QuerySubmitted,

    /// The generation call settled. Always carries a usable payload from
    /// the session's viewpoint, since the client substitutes a fallback on
    /// failure.
    ResponseSettled,
}

impl SessionEvent {
    /// Check if this event is user-initiated.
    pub fn is_user_event(&self) -> bool {
        matches!(self, Self::QuerySubmitted)
    }
}
