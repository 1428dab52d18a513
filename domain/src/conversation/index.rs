//! Conversation index
//!
//! Ordered summary list backing the sidebar. Independently fetched from the
//! gateway and replaced wholesale; it may lag behind the cache (eventual
//! consistency is fine), but must be refreshed after a send that created a
//! new conversation.

use super::entities::ConversationSummary;
use super::value_objects::ConversationId;

#[derive(Debug, Default)]
pub struct ConversationIndex {
    entries: Vec<ConversationSummary>,
}

impl ConversationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a fresh gateway snapshot.
    pub fn replace(&mut self, list: Vec<ConversationSummary>) {
        self.entries = list;
    }

    /// Resolve a summary by id.
    ///
    /// Ids are string-normalized in [`ConversationId`], so a lookup works
    /// regardless of whether the id originated as a number or a string.
    pub fn find_by_id(&self, id: &ConversationId) -> Option<&ConversationSummary> {
        self.entries.iter().find(|summary| &summary.id == id)
    }

    /// Current snapshot, in gateway order.
    pub fn snapshot(&self) -> &[ConversationSummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
