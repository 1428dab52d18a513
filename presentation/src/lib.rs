//! Presentation layer for uni-assist
//!
//! This crate contains CLI definitions, the interactive chat REPL, and the
//! terminal formatters for transcripts, the sidebar, and the constrained
//! markdown subset assistant replies use.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use chat::presets::{PRESET_QUESTIONS, sample_presets};
pub use cli::commands::Cli;
pub use output::markdown::render_markdown;
pub use output::transcript::TranscriptFormatter;
