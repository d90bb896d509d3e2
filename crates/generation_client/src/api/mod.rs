//! HTTP API layer for the generation services.

mod client;
pub mod models;

pub use client::GenerationClient;
