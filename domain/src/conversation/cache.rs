//! Conversation cache
//!
//! In-process store of loaded message histories, keyed by conversation id.
//! This is the single source of truth for what the transcript view renders.
//! All writes go through the methods below; nothing outside this type
//! touches an entry directly.
//!
//! There is no eviction: per-user conversation counts are small, so entries
//! live for the lifetime of the process.

use super::entities::{Conversation, Message};
use super::value_objects::ConversationId;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ConversationCache {
    entries: HashMap<ConversationId, Conversation>,
}

impl ConversationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ConversationId) -> Option<&Conversation> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &ConversationId) -> bool {
        self.entries.contains_key(id)
    }

    /// Replace the full message list for `id` with the server's version.
    ///
    /// The server owns message ordering and numbering, so this is a
    /// full replace, never a merge. Fields already cached for the entry
    /// (title, timestamps) are preserved; an unknown id gets an untitled
    /// entry, since the send reply carries no summary fields.
    pub fn upsert_messages(&mut self, id: &ConversationId, mut messages: Vec<Message>) {
        messages.sort_by_key(|m| m.id);
        match self.entries.get_mut(id) {
            Some(conversation) => conversation.messages = messages,
            None => {
                self.entries
                    .insert(id.clone(), Conversation::untitled(id.clone(), messages));
            }
        }
    }

    /// Store a fully fetched conversation, replacing any cached entry.
    pub fn hydrate(&mut self, conversation: Conversation) {
        self.entries.insert(conversation.id.clone(), conversation);
    }

    /// Locally insert a single message, keeping id order.
    ///
    /// Only for optimistic insertion into an already-loaded conversation;
    /// a miss is a silent no-op because optimistic append without a prior
    /// load is not supported.
    pub fn append_message(&mut self, id: &ConversationId, message: Message) {
        if let Some(conversation) = self.entries.get_mut(id) {
            let at = conversation
                .messages
                .partition_point(|m| m.id <= message.id);
            conversation.messages.insert(at, message);
        }
    }
}
