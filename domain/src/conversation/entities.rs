//! Conversation domain entities

use super::value_objects::ConversationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// `system` messages exist in storage but are never shown to the user.
    pub fn is_displayable(self) -> bool {
        !matches!(self, Role::System)
    }
}

/// A message in a conversation (Entity)
///
/// `id` is assigned by the gateway and is monotonically increasing within a
/// conversation; it defines display order, not arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(
        id: i64,
        role: Role,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            created_at,
        }
    }

    pub fn system(id: i64, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self::new(id, Role::System, content, created_at)
    }

    pub fn user(id: i64, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self::new(id, Role::User, content, created_at)
    }

    pub fn assistant(id: i64, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self::new(id, Role::Assistant, content, created_at)
    }
}

/// Sidebar summary of a conversation (Value Object)
///
/// Produced by the gateway's list operation. Immutable snapshot; a refetch
/// supersedes the whole list rather than patching entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: ConversationId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A loaded conversation (Entity)
///
/// Summary fields plus the full message history. Owned by the
/// [`ConversationCache`](super::cache::ConversationCache) once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(
        id: ConversationId,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            created_at,
            updated_at,
            messages,
        }
    }

    /// A conversation known only through a send reply, which carries no
    /// title or timestamps. The index resolves the display title later.
    pub fn untitled(id: ConversationId, messages: Vec<Message>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: String::new(),
            created_at: now,
            updated_at: now,
            messages,
        }
    }

    /// Messages in display order: ascending by message id, with `system`
    /// entries filtered out.
    pub fn display_messages(&self) -> Vec<&Message> {
        let mut shown: Vec<&Message> = self
            .messages
            .iter()
            .filter(|m| m.role.is_displayable())
            .collect();
        shown.sort_by_key(|m| m.id);
        shown
    }
}
