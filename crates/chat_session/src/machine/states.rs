//! Session states - the two lifecycle states of a chat session.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a chat session.
///
/// The guard on `Idle` is what enforces the single-in-flight-request
/// invariant: a submission is only accepted while idle, so at most one
/// generation call exists per session instance.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Ready for user input.
    Idle,

    /// A generation request is in flight; input is disabled until it
    /// settles.
    AwaitingResponse,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}

impl SessionState {
    /// Check if this state allows a new submission.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Check if a generation call is in flight.
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::AwaitingResponse)
    }

    /// Get a human-readable description of the current state.
    pub fn description(&self) -> &str {
        match self {
            Self::Idle => "Ready for input",
            Self::AwaitingResponse => "Waiting for assistant response",
        }
    }
}
