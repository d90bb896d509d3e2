use thiserror::Error;

/// Failures of the underlying generation services.
///
/// These never cross the [`crate::GenerationBackend`] boundary; the
/// infallible operations translate every variant into a fallback payload.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no generation api_base configured")]
    MissingApiBase,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend returned status {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Malformed(String),

    #[error("backend returned an empty `{0}` field")]
    EmptyPayload(&'static str),
}
