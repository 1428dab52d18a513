//! Constrained markdown rendering
//!
//! Assistant replies use a small markdown subset: `**bold**`, `*italic*`,
//! line breaks, and leading `-`/`*` bullets. Rendered here to ANSI styling
//! for the terminal. Pure text-in, text-out; anything outside the subset
//! passes through untouched.

use colored::Colorize;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());

/// Render the markdown subset to a terminal-ready string.
pub fn render_markdown(text: &str) -> String {
    text.lines()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(line: &str) -> String {
    // Bullets first, so `* item` is not eaten by the italic pass.
    let line = match line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        Some(rest) => format!("• {rest}"),
        None => line.to_string(),
    };

    let line = BOLD.replace_all(&line, |caps: &Captures| caps[1].bold().to_string());
    let line = ITALIC.replace_all(&line, |caps: &Captures| caps[1].italic().to_string());
    line.into_owned()
}
