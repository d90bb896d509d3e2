//! Session controller - owns one widget instance's conversational state.
//!
//! The controller drives the generation client, appends results to the
//! transcript, and exposes the latest suggested hand-off message. It is the
//! only writer of the session state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use chat_core::config::AssistantConfig;
use chat_core::message::ChatMessage;
use chat_core::transcript::Transcript;
use generation_client::GenerationBackend;

use crate::machine::{SessionEvent, SessionState, StateMachine};

/// Why a submission was not accepted. Neither reason is an error: both are
/// guards that leave the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The query was empty or whitespace-only after trimming.
    EmptyQuery,
    /// A generation call is already in flight; no queueing.
    Busy,
}

/// Result of a [`ChatSession::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The turn completed: one user and one assistant message were appended
    /// and the suggested hand-off message was updated.
    Completed {
        answer: String,
        suggested_handoff: String,
    },
    /// The submission was rejected before any state change.
    Rejected(RejectReason),
    /// The session was discarded while the call was in flight; the result
    /// was dropped without touching the transcript.
    Discarded,
}

struct SessionInner {
    machine: StateMachine,
    transcript: Transcript,
    pending_query: Option<String>,
    latest_handoff: Option<String>,
    greeted: bool,
    visible: bool,
}

/// One widget instance's session. Cheap to clone; clones share state.
///
/// Lifecycle: created when the widget first opens, discarded on teardown.
/// Nothing is persisted across sessions.
pub struct ChatSession<B> {
    backend: Arc<B>,
    greeting: String,
    inner: Arc<RwLock<SessionInner>>,
    epoch: Arc<AtomicU64>,
}

impl<B> Clone for ChatSession<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            greeting: self.greeting.clone(),
            inner: Arc::clone(&self.inner),
            epoch: Arc::clone(&self.epoch),
        }
    }
}

impl<B: GenerationBackend> ChatSession<B> {
    pub fn new(config: &AssistantConfig, backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            greeting: config.greeting.clone(),
            inner: Arc::new(RwLock::new(SessionInner {
                machine: StateMachine::new(),
                transcript: Transcript::new(),
                pending_query: None,
                latest_handoff: None,
                greeted: false,
                visible: false,
            })),
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Open the widget. The first open (and only the first) seeds the
    /// transcript with the configured assistant greeting.
    pub async fn open(&self) {
        let mut inner = self.inner.write().await;
        inner.visible = true;
        if !inner.greeted {
            inner.greeted = true;
            inner.transcript.append(ChatMessage::assistant(self.greeting.clone()));
        }
    }

    /// Hide the widget. Visibility only: the transcript and any in-flight
    /// turn survive a close/open toggle.
    pub async fn close(&self) {
        self.inner.write().await.visible = false;
    }

    /// Toggle widget visibility; returns whether it is now open.
    pub async fn toggle(&self) -> bool {
        let visible = self.inner.read().await.visible;
        if visible {
            self.close().await;
        } else {
            self.open().await;
        }
        !visible
    }

    /// Tear the session down. Any in-flight generation result is discarded
    /// when it eventually settles, so a stale response can never corrupt a
    /// newer transcript.
    pub fn discard(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    /// Submit a user query and run one full turn.
    ///
    /// The await on the generation backend is the session's single
    /// suspension point. On acceptance the caller should also clear its
    /// input field; that is UI state outside this model.
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        let query = raw.trim();
        if query.is_empty() {
            return SubmitOutcome::Rejected(RejectReason::EmptyQuery);
        }

        let epoch_at_submit = self.epoch.load(Ordering::SeqCst);
        {
            let mut inner = self.inner.write().await;
            if !inner.machine.state().accepts_input() {
                debug!("submission while awaiting response, ignoring");
                return SubmitOutcome::Rejected(RejectReason::Busy);
            }
            inner.machine.handle_event(SessionEvent::QuerySubmitted);
            inner.transcript.append(ChatMessage::user(query));
            // A stale suggestion must not be shown while the new turn is
            // pending.
            inner.latest_handoff = None;
            inner.pending_query = Some(query.to_string());
        }

        let reply = self.backend.answer_query(query).await;

        let mut inner = self.inner.write().await;
        if self.epoch.load(Ordering::SeqCst) != epoch_at_submit {
            debug!("session discarded while awaiting response, dropping result");
            return SubmitOutcome::Discarded;
        }
        inner.machine.handle_event(SessionEvent::ResponseSettled);
        inner.transcript.append(ChatMessage::assistant(reply.answer.clone()));
        inner.latest_handoff = Some(reply.suggested_handoff.clone());
        inner.pending_query = None;

        SubmitOutcome::Completed {
            answer: reply.answer,
            suggested_handoff: reply.suggested_handoff,
        }
    }

    /// Snapshot of the full ordered transcript, for rendering.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.inner.read().await.transcript.messages().to_vec()
    }

    pub async fn transcript_len(&self) -> usize {
        self.inner.read().await.transcript.len()
    }

    pub async fn state(&self) -> SessionState {
        self.inner.read().await.machine.state()
    }

    pub async fn pending_query(&self) -> Option<String> {
        self.inner.read().await.pending_query.clone()
    }

    /// The most recent suggested hand-off message, if any.
    pub async fn latest_handoff(&self) -> Option<String> {
        self.inner.read().await.latest_handoff.clone()
    }

    /// Whether the submission control should be enabled.
    pub async fn input_enabled(&self) -> bool {
        self.inner.read().await.machine.state().accepts_input()
    }

    /// Whether the hand-off action should be shown: only when a suggestion
    /// exists and no turn is pending.
    pub async fn handoff_available(&self) -> bool {
        let inner = self.inner.read().await;
        inner.latest_handoff.is_some() && inner.machine.state().accepts_input()
    }

    pub async fn is_open(&self) -> bool {
        self.inner.read().await.visible
    }
}
