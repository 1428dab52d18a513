//! Shared utility functions.

/// Shorten a string for log output.
///
/// Keeps at most `max_chars` characters and appends `...` when anything was
/// cut. Never splits a UTF-8 character.
pub fn preview(s: &str, max_chars: usize) -> String {
    let mut out = String::new();
    for (count, ch) in s.chars().enumerate() {
        if count == max_chars {
            out.push_str("...");
            return out;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_string_unchanged() {
        assert_eq!(preview("hello", 10), "hello");
    }

    #[test]
    fn preview_truncates_with_ellipsis() {
        assert_eq!(preview("hello world", 5), "hello...");
    }

    #[test]
    fn preview_multibyte() {
        assert_eq!(preview("あのね", 2), "あの...");
    }
}
