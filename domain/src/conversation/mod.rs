//! Conversation domain.
//!
//! - [`entities::Conversation`]: a titled message history
//! - [`entities::Message`]: a single message within a conversation
//! - [`cache::ConversationCache`]: loaded histories, keyed by id
//! - [`index::ConversationIndex`]: sidebar summary list

pub mod cache;
pub mod entities;
pub mod index;
pub mod value_objects;
