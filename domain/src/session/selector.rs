//! Active session selector

use crate::conversation::value_objects::ConversationId;

/// Tracks which conversation is active (Entity)
///
/// `None` means the user is composing a message that will create a new
/// conversation server-side. Selecting never fetches anything; loading is
/// the caller's job, which keeps this type pure state.
#[derive(Debug, Default)]
pub struct ActiveSession {
    active: Option<ConversationId>,
}

impl ActiveSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make an existing conversation active.
    pub fn select(&mut self, id: ConversationId) {
        self.active = Some(id);
    }

    /// Switch to composing a new, not-yet-created conversation.
    pub fn start_new(&mut self) {
        self.active = None;
    }

    pub fn current(&self) -> Option<&ConversationId> {
        self.active.as_ref()
    }

    pub fn is_new(&self) -> bool {
        self.active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unsaved() {
        let session = ActiveSession::new();
        assert!(session.is_new());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_select_then_start_new() {
        let mut session = ActiveSession::new();
        session.select(ConversationId::from(5));
        assert_eq!(session.current(), Some(&ConversationId::from("5")));

        session.start_new();
        assert!(session.is_new());
    }
}
