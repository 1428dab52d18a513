//! Transcript formatting for a loaded conversation

use crate::output::markdown::render_markdown;
use assist_domain::{Conversation, Message, Role};
use colored::Colorize;

/// Formats a conversation transcript for console display
pub struct TranscriptFormatter;

impl TranscriptFormatter {
    /// Format the whole conversation under a title header.
    ///
    /// Only displayable messages appear, in id order; the conversation's
    /// own (possibly empty) title is overridden by `title` so the caller
    /// can resolve it through the index.
    pub fn format(conversation: &Conversation, title: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", title.cyan().bold()));

        for message in conversation.display_messages() {
            output.push('\n');
            output.push_str(&Self::message(message));
            output.push('\n');
        }
        output
    }

    /// Format one message with its speaker line.
    pub fn message(message: &Message) -> String {
        let speaker = match message.role {
            Role::User => "You".green().bold(),
            Role::Assistant => "Assistant".yellow().bold(),
            // Filtered out of transcripts; kept total for direct calls.
            Role::System => "System".dimmed(),
        };
        let time = message.created_at.format("%H:%M");
        format!(
            "{} {}\n{}",
            speaker,
            time.to_string().dimmed(),
            render_markdown(&message.content)
        )
    }
}
