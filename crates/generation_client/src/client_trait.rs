use async_trait::async_trait;

use crate::api::models::{ComposedHandoff, TurnReply};

/// The generation capability as seen by the session layer.
///
/// Both operations are one-shot and infallible by contract: on any backend
/// failure the implementation substitutes a deterministic fallback payload.
/// Callers must pass a non-empty query; the session controller enforces
/// this before invoking either operation.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Answer a free-text query and suggest a hand-off message.
    async fn answer_query(&self, query: &str) -> TurnReply;

    /// Compose a ready-to-send hand-off message from a raw query. Does not
    /// consult or mutate any session state.
    async fn compose_handoff_message(&self, query: &str) -> ComposedHandoff;
}
