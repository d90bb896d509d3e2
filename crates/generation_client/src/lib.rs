//! generation_client - request/response boundary around the text-generation
//! backend.
//!
//! Wraps the two remote generation services (query answering and hand-off
//! message composition). The public [`GenerationBackend`] surface never
//! fails: backend errors are converted into deterministic fallback payloads
//! so callers always have something to show the user.

pub mod api;
pub mod client_trait;
pub mod error;
pub mod fallback;

pub use api::models::{ComposedHandoff, TurnReply};
pub use api::GenerationClient;
pub use client_trait::GenerationBackend;
pub use error::GenerationError;
