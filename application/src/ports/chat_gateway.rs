//! Chat Gateway port
//!
//! Defines the interface to the remote backend that owns conversation
//! storage and generates assistant replies. The adapter lives in the
//! infrastructure layer; transport-specific error shapes are converted into
//! [`GatewayError`] there and never travel further inward.

use assist_domain::{Conversation, ConversationId, ConversationSummary, Message, Question};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during gateway operations (closed taxonomy)
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The backend rejected the request payload. Empty questions are caught
    /// client-side, so seeing this usually means a contract drift.
    #[error("Request rejected: {0}")]
    Validation(String),

    /// Transport failure (connect, timeout, malformed body).
    #[error("Network error: {0}")]
    Network(String),

    /// Credential invalid or expired. Handled by a higher-level
    /// session-termination flow; the core only fails the operation cleanly.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The requested conversation no longer exists server-side.
    #[error("Conversation not found: {0}")]
    NotFound(ConversationId),

    /// The assistant failed to produce a response.
    #[error("Assistant error: {0}")]
    Server(String),
}

impl GatewayError {
    /// Whether retrying the same request later can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::Network(_) | GatewayError::Server(_))
    }
}

/// An outbound question, bound for a conversation or creating one.
///
/// `conversation_id: None` is the "new conversation" sentinel: the server is
/// the sole id authority, and the client defers identity assignment until
/// the reply arrives. Collapsing create and continue into one request shape
/// avoids reconciling client-generated temporary ids.
#[derive(Debug, Clone)]
pub struct SendMessageRequest {
    pub conversation_id: Option<ConversationId>,
    pub question: Question,
}

/// The gateway's answer to a send: the (possibly freshly assigned)
/// conversation id and the full, authoritative message history.
#[derive(Debug, Clone)]
pub struct SendMessageReply {
    pub conversation_id: ConversationId,
    pub messages: Vec<Message>,
}

/// Gateway to the remote chat backend
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// List conversation summaries for the sidebar.
    async fn list_conversations(&self) -> Result<Vec<ConversationSummary>, GatewayError>;

    /// Fetch one conversation with its full history.
    async fn get_conversation(&self, id: &ConversationId) -> Result<Conversation, GatewayError>;

    /// Submit a question; the reply always carries an assigned id.
    async fn send_message(
        &self,
        request: SendMessageRequest,
    ) -> Result<SendMessageReply, GatewayError>;
}
