//! Wire and domain models for the generation services.
//!
//! The wire types mirror the external services' JSON schemas exactly
//! (camelCase field names); the domain types are what the rest of the
//! system consumes.

use serde::{Deserialize, Serialize};

/// Request body shared by both generation services.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserQueryRequest {
    pub user_query: String,
}

/// Response of the Query-Answering Service.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub ai_answer: String,
    pub suggested_whatsapp_message: String,
}

/// Response of the Message-Composer Service.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ComposeResponse {
    pub composed_message: String,
}

/// One completed generation turn: the answer to show in the transcript plus
/// the suggested hand-off message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TurnReply {
    pub answer: String,
    pub suggested_handoff: String,
}

/// A pre-composed hand-off message, independent of any transcript.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ComposedHandoff {
    pub message: String,
}
