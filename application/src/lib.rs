//! Application layer for uni-assist
//!
//! This crate contains use cases and port definitions for the chat client
//! core: sending questions, lazily loading conversations, and keeping the
//! sidebar index in sync. It depends only on the domain layer.
//!
//! The three domain stores (cache, index, session) are shared as
//! [`Shared`] handles and injected into the use cases that need them; each
//! store is only ever mutated through its own contract methods.

pub mod ports;
pub mod use_cases;

use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle to a single-writer state store.
pub type Shared<T> = Arc<Mutex<T>>;

/// Wrap a store for injection into use cases.
pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(Mutex::new(value))
}

// Re-export commonly used types
pub use ports::{
    chat_gateway::{ChatGateway, GatewayError, SendMessageReply, SendMessageRequest},
    credentials::{AnonymousCredentials, CredentialProvider},
};
pub use use_cases::open_conversation::{
    OpenConversationError, OpenConversationUseCase, OpenOutcome,
};
pub use use_cases::refresh_index::RefreshIndexUseCase;
pub use use_cases::send_message::{SendError, SendMessageUseCase, SendOutcome};
