//! Deterministic fallback payloads.
//!
//! When a generation service is unreachable or returns an unusable payload,
//! the user still gets an actionable response: a generic apology plus a
//! hand-off message echoing their original query verbatim.

use crate::api::models::{ComposedHandoff, TurnReply};

const FALLBACK_ANSWER: &str =
    "I'm sorry, I couldn't process that. Could you try rephrasing or contact us on WhatsApp?";

/// Fallback for the query-answering operation.
pub fn turn_reply(org_name: &str, query: &str) -> TurnReply {
    TurnReply {
        answer: FALLBACK_ANSWER.to_string(),
        suggested_handoff: format!("Hello {org_name}, I had a query: {query}"),
    }
}

/// Fallback for the message-composer operation.
pub fn composed_handoff(org_name: &str, query: &str) -> ComposedHandoff {
    ComposedHandoff {
        message: format!("Hello {org_name}, I have a query: {query}"),
    }
}
