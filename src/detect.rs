//! Input mode detection for the free-text field.
//!
//! The builder has a single text field that doubles as a URL input and a
//! curl paste target. Detection is stateless and runs on every edit: a
//! partially typed command is simply re-classified from scratch.

/// How the free-text field is currently being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    CurlCommand,
    RawUrl,
}

/// Classifies free text by its leading token, ASCII case-insensitively.
pub fn detect_mode(input: &str) -> InputMode {
    match input.trim().split_whitespace().next() {
        Some(word) if word.eq_ignore_ascii_case("curl") => InputMode::CurlCommand,
        _ => InputMode::RawUrl,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curl_prefix_is_a_command() {
        assert_eq!(detect_mode("curl https://example.com"), InputMode::CurlCommand);
        assert_eq!(detect_mode("  CURL -X POST x"), InputMode::CurlCommand);
        assert_eq!(detect_mode("curl"), InputMode::CurlCommand);
    }

    #[test]
    fn anything_else_is_a_url() {
        assert_eq!(detect_mode("https://example.com"), InputMode::RawUrl);
        assert_eq!(detect_mode("cur"), InputMode::RawUrl);
        assert_eq!(detect_mode("curly.example.com"), InputMode::RawUrl);
        assert_eq!(detect_mode(""), InputMode::RawUrl);
    }
}
