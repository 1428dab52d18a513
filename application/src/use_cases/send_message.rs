//! Send Message use case.
//!
//! The coordinator behind the compose box. It owns the two-state lifecycle
//! (`Idle` / `Sending`), the pending draft text, and the one place where a
//! successful send is folded back into the domain stores:
//!
//! 1. Reject empty input locally, without a request.
//! 2. At most one send in flight, globally: a second submit while sending
//!    is ignored, which is what stops rapid double-submits from duplicating
//!    questions.
//! 3. On success: replace the cached history for the assigned id, re-select
//!    the session (this is how a brand-new conversation acquires its
//!    permanent id transparently), refresh the index when the send created
//!    the conversation, and clear the draft.
//! 4. On failure: nothing is mutated and the draft survives for retry.
//!
//! All store mutations happen after the gateway reply, never before, so a
//! failed send can never leave partially-applied state.

use crate::Shared;
use crate::ports::chat_gateway::{ChatGateway, GatewayError, SendMessageRequest};
use assist_domain::util::preview;
use assist_domain::{
    ActiveSession, ConversationCache, ConversationId, ConversationIndex, Question,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Errors that can occur while sending a question.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

impl SendError {
    /// Description suitable for direct display to the user.
    pub fn user_message(&self) -> String {
        let SendError::Gateway(error) = self;
        match error {
            GatewayError::Auth(_) => "Your session has expired. Please sign in again.".to_string(),
            GatewayError::NotFound(_) => "This conversation no longer exists.".to_string(),
            _ => "Failed to send message. Please try again.".to_string(),
        }
    }
}

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The gateway accepted the question; the conversation now lives under
    /// this id in the cache.
    Delivered(ConversationId),
    /// Nothing left after trimming: no request was issued.
    EmptyInput,
    /// Another send is in flight: this submission was ignored.
    Busy,
}

/// Send coordinator (use case)
pub struct SendMessageUseCase {
    gateway: Arc<dyn ChatGateway>,
    cache: Shared<ConversationCache>,
    index: Shared<ConversationIndex>,
    session: Shared<ActiveSession>,
    draft: Mutex<String>,
    in_flight: AtomicBool,
}

/// Resets the in-flight flag on every exit path out of `dispatch`.
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl SendMessageUseCase {
    pub fn new(
        gateway: Arc<dyn ChatGateway>,
        cache: Shared<ConversationCache>,
        index: Shared<ConversationIndex>,
        session: Shared<ActiveSession>,
    ) -> Self {
        Self {
            gateway,
            cache,
            index,
            session,
            draft: Mutex::new(String::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a send is currently in flight.
    pub fn is_sending(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Replace the pending draft text.
    pub async fn set_draft(&self, text: impl Into<String>) {
        *self.draft.lock().await = text.into();
    }

    /// The pending draft text; non-empty after a failed send so the user
    /// can retry without retyping.
    pub async fn draft(&self) -> String {
        self.draft.lock().await.clone()
    }

    /// Submit the pending draft.
    pub async fn submit_draft(&self) -> Result<SendOutcome, SendError> {
        let text = self.draft().await;
        self.submit(&text).await
    }

    /// Submit one of the pre-canned questions. Identical to typing it:
    /// same validation, same single-flight discipline.
    pub async fn submit_preset(&self, text: &str) -> Result<SendOutcome, SendError> {
        self.set_draft(text).await;
        self.submit(text).await
    }

    /// Submit a question against the currently active conversation, or
    /// create a new one when the session holds the null sentinel.
    pub async fn submit(&self, text: &str) -> Result<SendOutcome, SendError> {
        let Some(question) = Question::try_new(text) else {
            return Ok(SendOutcome::EmptyInput);
        };
        self.dispatch(question).await
    }

    async fn dispatch(&self, question: Question) -> Result<SendOutcome, SendError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            debug!("send already in flight, ignoring submission");
            return Ok(SendOutcome::Busy);
        }
        let _guard = FlightGuard(&self.in_flight);

        let origin = self.session.lock().await.current().cloned();
        info!(
            conversation = origin.as_ref().map(ConversationId::as_str),
            question = %preview(question.content(), 80),
            "submitting question"
        );

        let reply = self
            .gateway
            .send_message(SendMessageRequest {
                conversation_id: origin.clone(),
                question,
            })
            .await?;

        let assigned = reply.conversation_id.clone();
        self.cache
            .lock()
            .await
            .upsert_messages(&assigned, reply.messages);

        {
            let mut session = self.session.lock().await;
            if session.current() == origin.as_ref() {
                session.select(assigned.clone());
            } else {
                // The user switched conversations while this send was in
                // flight; the cache write above is enough.
                debug!(
                    assigned = assigned.as_str(),
                    "session reassigned mid-flight, keeping user selection"
                );
            }
        }

        if origin.is_none() {
            // The send created the conversation; pull it into the sidebar.
            // Best effort: the send itself already succeeded.
            if let Err(error) = self.refresh_index().await {
                warn!(%error, "index refresh after conversation creation failed");
            }
        }

        self.draft.lock().await.clear();
        Ok(SendOutcome::Delivered(assigned))
    }

    async fn refresh_index(&self) -> Result<(), GatewayError> {
        let list = self.gateway.list_conversations().await?;
        self.index.lock().await.replace(list);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::chat_gateway::SendMessageReply;
    use crate::shared;
    use assist_domain::{Conversation, ConversationSummary, Message};
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn reply(id: i64) -> SendMessageReply {
        SendMessageReply {
            conversation_id: ConversationId::from(id),
            messages: vec![
                Message::user(1, "hello", at(1)),
                Message::assistant(2, "hi, how can I help?", at(2)),
            ],
        }
    }

    fn summary(id: i64) -> ConversationSummary {
        ConversationSummary {
            id: ConversationId::from(id),
            title: format!("conversation {id}"),
            created_at: at(0),
            updated_at: at(0),
        }
    }

    #[derive(Default)]
    struct MockGateway {
        send_calls: AtomicUsize,
        list_calls: AtomicUsize,
        /// Taken on the next send; `None` falls back to `reply(42)`.
        next_send: StdMutex<Option<Result<SendMessageReply, GatewayError>>>,
        /// When set, sends block until notified.
        gate: Option<Arc<Notify>>,
    }

    impl MockGateway {
        fn with_reply(result: Result<SendMessageReply, GatewayError>) -> Self {
            Self {
                next_send: StdMutex::new(Some(result)),
                ..Self::default()
            }
        }

        fn gated(gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl ChatGateway for MockGateway {
        async fn list_conversations(&self) -> Result<Vec<ConversationSummary>, GatewayError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![summary(42)])
        }

        async fn get_conversation(
            &self,
            id: &ConversationId,
        ) -> Result<Conversation, GatewayError> {
            Err(GatewayError::NotFound(id.clone()))
        }

        async fn send_message(
            &self,
            _request: SendMessageRequest,
        ) -> Result<SendMessageReply, GatewayError> {
            self.send_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            match self.next_send.lock().unwrap().take() {
                Some(result) => result,
                None => Ok(reply(42)),
            }
        }
    }

    struct Harness {
        gateway: Arc<MockGateway>,
        cache: Shared<ConversationCache>,
        index: Shared<ConversationIndex>,
        session: Shared<ActiveSession>,
        coordinator: Arc<SendMessageUseCase>,
    }

    fn harness(gateway: MockGateway) -> Harness {
        let gateway = Arc::new(gateway);
        let cache = shared(ConversationCache::new());
        let index = shared(ConversationIndex::new());
        let session = shared(ActiveSession::new());
        let coordinator = Arc::new(SendMessageUseCase::new(
            gateway.clone(),
            cache.clone(),
            index.clone(),
            session.clone(),
        ));
        Harness {
            gateway,
            cache,
            index,
            session,
            coordinator,
        }
    }

    #[tokio::test]
    async fn test_new_conversation_promotion() {
        let h = harness(MockGateway::default());

        let outcome = h.coordinator.submit("hello").await.unwrap();

        assert_eq!(outcome, SendOutcome::Delivered(ConversationId::from(42)));
        assert_eq!(
            h.session.lock().await.current(),
            Some(&ConversationId::from("42"))
        );
        let cache = h.cache.lock().await;
        let convo = cache.get(&ConversationId::from(42)).unwrap();
        assert_eq!(convo.messages.len(), 2);
        // Creation triggers exactly one index refresh.
        assert_eq!(h.gateway.list_calls.load(Ordering::SeqCst), 1);
        assert_eq!(h.index.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_existing_conversation_skips_index_refresh() {
        let h = harness(MockGateway::default());
        h.session.lock().await.select(ConversationId::from(42));

        h.coordinator.submit("follow-up").await.unwrap();

        assert_eq!(h.gateway.list_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_input_is_a_noop() {
        let h = harness(MockGateway::default());

        let outcome = h.coordinator.submit("   \n").await.unwrap();

        assert_eq!(outcome, SendOutcome::EmptyInput);
        assert_eq!(h.gateway.send_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_single_flight_rejects_overlapping_submit() {
        let gate = Arc::new(Notify::new());
        let h = harness(MockGateway::gated(gate.clone()));

        let first = {
            let coordinator = h.coordinator.clone();
            tokio::spawn(async move { coordinator.submit("first").await })
        };
        // Let the first submit reach the gateway and park on the gate.
        while h.gateway.send_calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert!(h.coordinator.is_sending());

        let second = h.coordinator.submit("second").await.unwrap();
        assert_eq!(second, SendOutcome::Busy);

        gate.notify_one();
        let first = first.await.unwrap().unwrap();
        assert!(matches!(first, SendOutcome::Delivered(_)));
        // Exactly one request went out.
        assert_eq!(h.gateway.send_calls.load(Ordering::SeqCst), 1);
        assert!(!h.coordinator.is_sending());
    }

    #[tokio::test]
    async fn test_failure_leaves_state_untouched_and_draft_preserved() {
        let h = harness(MockGateway::with_reply(Err(GatewayError::Network(
            "connection reset".into(),
        ))));
        h.session.lock().await.select(ConversationId::from(7));
        h.index.lock().await.replace(vec![summary(7)]);
        h.coordinator.set_draft("please retry me").await;

        let error = h.coordinator.submit_draft().await.unwrap_err();

        assert_eq!(error.user_message(), "Failed to send message. Please try again.");
        assert_eq!(
            h.session.lock().await.current(),
            Some(&ConversationId::from(7))
        );
        assert!(h.cache.lock().await.get(&ConversationId::from(7)).is_none());
        assert_eq!(h.index.lock().await.len(), 1);
        assert_eq!(h.coordinator.draft().await, "please retry me");
        assert!(!h.coordinator.is_sending());
    }

    #[tokio::test]
    async fn test_success_clears_draft() {
        let h = harness(MockGateway::default());
        h.coordinator.set_draft("hello").await;

        h.coordinator.submit_draft().await.unwrap();

        assert!(h.coordinator.draft().await.is_empty());
    }

    #[tokio::test]
    async fn test_mid_flight_reselection_wins_over_assignment() {
        let gate = Arc::new(Notify::new());
        let h = harness(MockGateway::gated(gate.clone()));

        // Send from the "new conversation" sentinel...
        let send = {
            let coordinator = h.coordinator.clone();
            tokio::spawn(async move { coordinator.submit("hello").await })
        };
        while h.gateway.send_calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        // ...then the user opens an unrelated conversation mid-flight.
        h.session.lock().await.select(ConversationId::from(99));

        gate.notify_one();
        send.await.unwrap().unwrap();

        // The user's selection stands; the reply still landed in the cache.
        assert_eq!(
            h.session.lock().await.current(),
            Some(&ConversationId::from(99))
        );
        assert!(h.cache.lock().await.get(&ConversationId::from(42)).is_some());
    }

    #[tokio::test]
    async fn test_preset_goes_through_same_discipline() {
        let gate = Arc::new(Notify::new());
        let h = harness(MockGateway::gated(gate.clone()));

        let first = {
            let coordinator = h.coordinator.clone();
            tokio::spawn(async move { coordinator.submit("typed question").await })
        };
        while h.gateway.send_calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        let preset = h
            .coordinator
            .submit_preset("What are the admission requirements for OUI?")
            .await
            .unwrap();
        assert_eq!(preset, SendOutcome::Busy);

        gate.notify_one();
        first.await.unwrap().unwrap();
        assert_eq!(h.gateway.send_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_index_refresh_failure_does_not_fail_the_send() {
        let gateway = MockGateway::default();
        // First send succeeds, but make the follow-up list call fail by
        // counting: simplest is a gateway whose list always errors.
        struct ListFails(MockGateway);

        #[async_trait]
        impl ChatGateway for ListFails {
            async fn list_conversations(
                &self,
            ) -> Result<Vec<ConversationSummary>, GatewayError> {
                self.0.list_calls.fetch_add(1, Ordering::SeqCst);
                Err(GatewayError::Network("list failed".into()))
            }
            async fn get_conversation(
                &self,
                id: &ConversationId,
            ) -> Result<Conversation, GatewayError> {
                self.0.get_conversation(id).await
            }
            async fn send_message(
                &self,
                request: SendMessageRequest,
            ) -> Result<SendMessageReply, GatewayError> {
                self.0.send_message(request).await
            }
        }

        let gateway = Arc::new(ListFails(gateway));
        let cache = shared(ConversationCache::new());
        let index = shared(ConversationIndex::new());
        let session = shared(ActiveSession::new());
        let coordinator = SendMessageUseCase::new(
            gateway.clone(),
            cache.clone(),
            index.clone(),
            session.clone(),
        );

        let outcome = coordinator.submit("hello").await.unwrap();

        assert!(matches!(outcome, SendOutcome::Delivered(_)));
        assert_eq!(gateway.0.list_calls.load(Ordering::SeqCst), 1);
        // The index simply stayed stale.
        assert!(index.lock().await.is_empty());
    }
}
