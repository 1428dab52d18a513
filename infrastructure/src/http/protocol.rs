//! Wire protocol for the assistant backend
//!
//! DTOs matching the backend's JSON bodies, converted to domain types at
//! this boundary. Endpoints:
//!
//! - `GET  /chats`            → [`ChatListEnvelope`]
//! - `GET  /chats/{id}`       → [`ChatDetailDto`]
//! - `POST /get_ai_response`  ← [`AskRequest`], → [`AskResponse`]
//!
//! Error responses carry an [`ErrorBody`] with a human-readable `detail`.

use assist_domain::{Conversation, ConversationId, ConversationSummary, Message, Role};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Conversation id as it appears on the wire.
///
/// The backend stores numeric ids but some paths echo them back as strings;
/// both collapse into the same [`ConversationId`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

impl From<WireId> for ConversationId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Number(n) => ConversationId::from(n),
            WireId::Text(s) => ConversationId::from(s),
        }
    }
}

/// Accept both RFC 3339 and the backend's naive `YYYY-MM-DDTHH:MM:SS[.ffff]`
/// timestamps; naive values are taken as UTC.
fn wire_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(serde::de::Error::custom)
}

/// Body of `GET /chats`.
#[derive(Debug, Deserialize)]
pub struct ChatListEnvelope {
    pub chats: Vec<ChatSummaryDto>,
}

#[derive(Debug, Deserialize)]
pub struct ChatSummaryDto {
    pub id: WireId,
    pub title: String,
    #[serde(deserialize_with = "wire_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "wire_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl From<ChatSummaryDto> for ConversationSummary {
    fn from(dto: ChatSummaryDto) -> Self {
        ConversationSummary {
            id: dto.id.into(),
            title: dto.title,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MessageDto {
    pub id: i64,
    pub role: Role,
    pub content: String,
    #[serde(deserialize_with = "wire_datetime")]
    pub created_at: DateTime<Utc>,
}

impl From<MessageDto> for Message {
    fn from(dto: MessageDto) -> Self {
        Message::new(dto.id, dto.role, dto.content, dto.created_at)
    }
}

/// Body of `GET /chats/{id}`: summary fields plus the history.
#[derive(Debug, Deserialize)]
pub struct ChatDetailDto {
    #[serde(flatten)]
    pub summary: ChatSummaryDto,
    #[serde(default)]
    pub messages: Vec<MessageDto>,
}

impl From<ChatDetailDto> for Conversation {
    fn from(dto: ChatDetailDto) -> Self {
        Conversation::new(
            dto.summary.id.into(),
            dto.summary.title,
            dto.summary.created_at,
            dto.summary.updated_at,
            dto.messages.into_iter().map(Message::from).collect(),
        )
    }
}

/// Body of `POST /get_ai_response`.
///
/// `chat_id: null` asks the backend to create a conversation; the client
/// always requests the history back so the reply can be applied wholesale.
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub chat_id: Option<&'a str>,
    pub user_question: &'a str,
    pub return_with_history: bool,
}

/// Reply of `POST /get_ai_response`.
///
/// `messages` is null when the history was not requested; this client
/// treats that as a server fault since it always asks for it.
#[derive(Debug, Deserialize)]
pub struct AskResponse {
    pub response: String,
    pub chat_id: WireId,
    pub messages: Option<Vec<MessageDto>>,
}

/// FastAPI-style error body.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}
