//! Conversation value objects

use serde::{Deserialize, Serialize};

/// Stable identifier of a conversation (Value Object)
///
/// The gateway assigns ids and may transmit them as JSON numbers or strings
/// depending on the endpoint. Both normalize to the same string here, so
/// `ConversationId::from(42) == ConversationId::from("42")` and lookups never
/// depend on which representation arrived first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for ConversationId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ConversationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ConversationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_forms_are_equal() {
        assert_eq!(ConversationId::from(42), ConversationId::from("42"));
    }

    #[test]
    fn test_display_round_trip() {
        let id = ConversationId::from(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(id.as_str(), "7");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ConversationId::from("13");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"13\"");
    }
}
