//! chat_core - Core types for the conversational hand-off system
//!
//! This crate provides the foundational types used across the hand-off crates:
//! - `message` - ChatMessage and sender roles
//! - `transcript` - the append-only per-session message log
//! - `config` - assistant/channel configuration

pub mod config;
pub mod message;
pub mod transcript;

// Re-export commonly used types
pub use config::AssistantConfig;
pub use message::{ChatMessage, Sender};
pub use transcript::Transcript;
