//! Open Conversation use case.
//!
//! Selecting a conversation is pure state (the session flips immediately);
//! the history is loaded lazily, on first selection, and replaces the cache
//! entry wholesale from the gateway's answer. A conversation that vanished
//! server-side resolves to a `Missing` outcome rather than an error: the
//! view shows an empty state instead of crashing.
//!
//! A late-resolving fetch only ever writes the cache entry for the id it
//! was issued with; it never touches the session, so it cannot clobber a
//! selection the user changed while it was in flight.

use crate::Shared;
use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use assist_domain::{ActiveSession, ConversationCache, ConversationId};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while opening a conversation.
#[derive(Error, Debug)]
pub enum OpenConversationError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Result of opening a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// History is in the cache, ready to render.
    Ready,
    /// The id no longer exists server-side; render an empty state.
    Missing,
}

/// Open (select and lazily load) a conversation.
pub struct OpenConversationUseCase {
    gateway: Arc<dyn ChatGateway>,
    cache: Shared<ConversationCache>,
    session: Shared<ActiveSession>,
}

impl OpenConversationUseCase {
    pub fn new(
        gateway: Arc<dyn ChatGateway>,
        cache: Shared<ConversationCache>,
        session: Shared<ActiveSession>,
    ) -> Self {
        Self {
            gateway,
            cache,
            session,
        }
    }

    pub async fn execute(&self, id: ConversationId) -> Result<OpenOutcome, OpenConversationError> {
        self.session.lock().await.select(id.clone());

        if self.cache.lock().await.contains(&id) {
            debug!(conversation = id.as_str(), "already cached, no fetch");
            return Ok(OpenOutcome::Ready);
        }

        match self.gateway.get_conversation(&id).await {
            Ok(conversation) => {
                info!(
                    conversation = id.as_str(),
                    messages = conversation.messages.len(),
                    "conversation loaded"
                );
                self.cache.lock().await.hydrate(conversation);
                Ok(OpenOutcome::Ready)
            }
            Err(GatewayError::NotFound(_)) => {
                debug!(conversation = id.as_str(), "conversation gone server-side");
                Ok(OpenOutcome::Missing)
            }
            Err(error) => Err(error.into()),
        }
    }
}
