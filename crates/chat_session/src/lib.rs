//! chat_session - State machine and session controller for the hand-off
//! chat widget.
//!
//! A session owns the transcript, the latest suggested hand-off message,
//! and the `Idle`/`AwaitingResponse` lifecycle that enforces a single
//! in-flight generation request per widget instance.

pub mod machine;
pub mod session;

// Re-export commonly used types
pub use machine::{SessionEvent, SessionState, StateMachine, StateTransition};
pub use session::{ChatSession, RejectReason, SubmitOutcome};
