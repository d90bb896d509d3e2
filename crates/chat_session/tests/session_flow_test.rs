//! Integration tests for the session controller turn lifecycle.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use chat_core::config::AssistantConfig;
use chat_core::message::Sender;
use chat_session::{ChatSession, RejectReason, SessionState, SubmitOutcome};
use generation_client::{ComposedHandoff, GenerationBackend, TurnReply};

fn test_config() -> AssistantConfig {
    AssistantConfig::baseline()
}

/// Backend that answers immediately and counts calls.
#[derive(Default)]
struct EchoBackend {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl GenerationBackend for EchoBackend {
    async fn answer_query(&self, query: &str) -> TurnReply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        TurnReply {
            answer: format!("answer to: {query}"),
            suggested_handoff: format!("Hello, I was asking about: {query}"),
        }
    }

    async fn compose_handoff_message(&self, query: &str) -> ComposedHandoff {
        ComposedHandoff {
            message: format!("composed: {query}"),
        }
    }
}

/// Backend that blocks until released, to observe the in-flight state.
struct GatedBackend {
    started: Arc<Notify>,
    release: Arc<Notify>,
}

#[async_trait]
impl GenerationBackend for GatedBackend {
    async fn answer_query(&self, query: &str) -> TurnReply {
        self.started.notify_one();
        self.release.notified().await;
        TurnReply {
            answer: "late answer".to_string(),
            suggested_handoff: format!("late suggestion for: {query}"),
        }
    }

    async fn compose_handoff_message(&self, query: &str) -> ComposedHandoff {
        ComposedHandoff {
            message: format!("composed: {query}"),
        }
    }
}

#[tokio::test]
async fn greeting_is_seeded_exactly_once() {
    let config = test_config();
    let session = ChatSession::new(&config, EchoBackend::default());

    assert_eq!(session.transcript_len().await, 0);

    session.open().await;
    let transcript = session.transcript().await;
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].sender, Sender::Assistant);
    assert_eq!(transcript[0].text, config.greeting);

    // Close/open toggles must not re-seed.
    session.close().await;
    session.open().await;
    assert_eq!(session.transcript_len().await, 1);
}

#[tokio::test]
async fn completed_turn_appends_one_user_and_one_assistant_message() {
    let session = ChatSession::new(&test_config(), EchoBackend::default());
    session.open().await;

    let outcome = session.submit("  Do you ship to Canada?  ").await;
    let SubmitOutcome::Completed { suggested_handoff, .. } = outcome else {
        panic!("expected completed turn, got {outcome:?}");
    };

    let transcript = session.transcript().await;
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[1].sender, Sender::User);
    // The literal query text is appended, trimmed of surrounding whitespace.
    assert_eq!(transcript[1].text, "Do you ship to Canada?");
    assert_eq!(transcript[2].sender, Sender::Assistant);

    assert_eq!(session.state().await, SessionState::Idle);
    assert_eq!(session.latest_handoff().await, Some(suggested_handoff));
    assert!(session.handoff_available().await);
    assert!(session.pending_query().await.is_none());
}

#[tokio::test]
async fn empty_and_whitespace_submissions_are_no_ops() {
    let session = ChatSession::new(&test_config(), EchoBackend::default());
    session.open().await;

    for raw in ["", "   ", "\n\t "] {
        let outcome = session.submit(raw).await;
        assert_eq!(outcome, SubmitOutcome::Rejected(RejectReason::EmptyQuery));
    }
    assert_eq!(session.transcript_len().await, 1);
    assert_eq!(session.state().await, SessionState::Idle);
}

#[tokio::test]
async fn submission_while_awaiting_is_silently_rejected() {
    let started = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let backend = GatedBackend {
        started: Arc::clone(&started),
        release: Arc::clone(&release),
    };
    let session = ChatSession::new(&test_config(), backend);
    session.open().await;

    let in_flight = {
        let session = session.clone();
        tokio::spawn(async move { session.submit("first question").await })
    };
    started.notified().await;

    assert_eq!(session.state().await, SessionState::AwaitingResponse);
    assert!(!session.input_enabled().await);
    assert!(!session.handoff_available().await);
    assert_eq!(session.pending_query().await.as_deref(), Some("first question"));

    let len_before = session.transcript_len().await;
    let outcome = session.submit("second question").await;
    assert_eq!(outcome, SubmitOutcome::Rejected(RejectReason::Busy));
    assert_eq!(session.transcript_len().await, len_before);
    assert_eq!(session.state().await, SessionState::AwaitingResponse);

    release.notify_one();
    let outcome = in_flight.await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Completed { .. }));
    assert_eq!(session.state().await, SessionState::Idle);
    assert_eq!(session.transcript_len().await, 3);
}

#[tokio::test]
async fn new_submission_clears_previous_suggestion() {
    let started = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let backend = GatedBackend {
        started: Arc::clone(&started),
        release: Arc::clone(&release),
    };
    let session = ChatSession::new(&test_config(), backend);
    session.open().await;

    // Complete a first turn so a suggestion exists.
    let first = {
        let session = session.clone();
        tokio::spawn(async move { session.submit("turn one").await })
    };
    started.notified().await;
    release.notify_one();
    first.await.unwrap();
    assert!(session.latest_handoff().await.is_some());

    // While the second turn is pending, the old suggestion must be gone.
    let second = {
        let session = session.clone();
        tokio::spawn(async move { session.submit("turn two").await })
    };
    started.notified().await;
    assert_eq!(session.latest_handoff().await, None);

    release.notify_one();
    second.await.unwrap();
    assert_eq!(
        session.latest_handoff().await.as_deref(),
        Some("late suggestion for: turn two")
    );
}

#[tokio::test]
async fn identical_consecutive_queries_always_trigger_new_calls() {
    let calls = Arc::new(AtomicUsize::new(0));
    let backend = EchoBackend {
        calls: Arc::clone(&calls),
    };
    let session = ChatSession::new(&test_config(), backend);
    session.open().await;

    session.submit("same question").await;
    session.submit("same question").await;

    // No de-duplication or caching: each submission reaches the backend.
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(session.transcript_len().await, 5);
}

#[tokio::test]
async fn stale_result_after_discard_is_dropped() {
    let started = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let backend = GatedBackend {
        started: Arc::clone(&started),
        release: Arc::clone(&release),
    };
    let session = ChatSession::new(&test_config(), backend);
    session.open().await;

    let in_flight = {
        let session = session.clone();
        tokio::spawn(async move { session.submit("abandoned question").await })
    };
    started.notified().await;

    session.discard();
    release.notify_one();

    let outcome = in_flight.await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Discarded);

    // Greeting + user message only; the late answer never landed.
    let transcript = session.transcript().await;
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.last().unwrap().sender, Sender::User);
    assert_eq!(session.latest_handoff().await, None);
}

#[tokio::test]
async fn end_to_end_handoff_scenario() {
    let config = test_config();
    let session = ChatSession::new(&config, EchoBackend::default());

    session.open().await;
    assert_eq!(session.transcript_len().await, 1);

    let outcome = session.submit("Do you ship to Canada?").await;
    assert!(matches!(outcome, SubmitOutcome::Completed { .. }));
    assert_eq!(session.transcript_len().await, 3);

    let suggestion = session.latest_handoff().await.expect("suggestion set");
    assert!(!suggestion.is_empty());

    let dispatcher = handoff_dispatch::HandoffDispatcher::new(&config).unwrap();
    let url = dispatcher.handoff_url(Some(&suggestion));
    let text = url
        .query_pairs()
        .find(|(key, _)| key == "text")
        .map(|(_, value)| value.into_owned())
        .expect("text parameter present");
    assert_eq!(text, suggestion);
}
