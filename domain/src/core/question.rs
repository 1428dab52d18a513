//! Question value object

use serde::{Deserialize, Serialize};

/// A question composed by the user (Value Object)
///
/// Guaranteed non-empty after trimming. Constructing one is the
/// precondition for issuing a send; empty input never becomes a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a question from raw input.
    ///
    /// The input is trimmed; `None` if nothing remains.
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_trims_input() {
        let q = Question::try_new("  How do I register for courses?  ").unwrap();
        assert_eq!(q.content(), "How do I register for courses?");
    }

    #[test]
    fn test_try_new_empty() {
        assert!(Question::try_new("").is_none());
        assert!(Question::try_new("   ").is_none());
        assert!(Question::try_new("\n\t").is_none());
    }

    #[test]
    fn test_try_new_valid() {
        assert!(Question::try_new("What are the admission requirements?").is_some());
    }
}
