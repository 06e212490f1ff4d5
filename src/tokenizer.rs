//! Lexical stage of the curl pipeline.
//!
//! Splits raw command text into shell-like tokens according to the grammar
//! in `curl.pest`. Tokenization is total: quoting problems degrade to an
//! open quote swallowing the rest of the input, and line continuations are
//! collapsed before the grammar runs so a multi-line pasted command
//! tokenizes identically to its one-line form.

use pest::Parser as _;
use pest_derive::Parser;

#[derive(Debug, Parser)]
#[grammar = "src/curl.pest"]
pub(crate) struct CurlTokenizer;

/// Splits raw text into shell-like tokens, quotes retained.
///
/// Never fails: input that cannot be tokenized (not reachable with the
/// current grammar) yields an empty token list.
pub fn tokenize(input: &str) -> Vec<String> {
    let collapsed = collapse_continuations(input);
    match CurlTokenizer::parse(Rule::input, &collapsed) {
        Ok(pairs) => pairs
            .filter(|pair| pair.as_rule() == Rule::token)
            .map(|pair| pair.as_str().to_string())
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Collapses backslash-newline continuations (and the indentation that
/// follows them) into a single space.
fn collapse_continuations(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            // Accept both `\<LF>` and `\<CRLF>` as continuations.
            let mut rest = chars.clone();
            let newline = match rest.next() {
                Some('\n') => true,
                Some('\r') => matches!(rest.next(), Some('\n')),
                _ => false,
            };
            if newline {
                while matches!(rest.peek(), Some(w) if w.is_whitespace()) {
                    rest.next();
                }
                chars = rest;
                out.push(' ');
                continue;
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_whitespace() {
        let tokens = tokenize("curl -X POST https://example.com");
        assert_eq!(tokens, vec!["curl", "-X", "POST", "https://example.com"]);
    }

    #[test]
    fn tokenize_keeps_quoted_spans_intact() {
        let tokens = tokenize(r#"curl -H 'Content-Type: application/json' -d "{"a": 1}""#);
        assert_eq!(tokens[2], "'Content-Type: application/json'");
        // Adjacent quoted and bare runs glue into one token, shell style.
        assert_eq!(tokens[4], r#""{"a": 1}""#);
    }

    #[test]
    fn tokenize_glues_adjacent_runs() {
        let tokens = tokenize("curl abc'def ghi'jkl");
        assert_eq!(tokens, vec!["curl", "abc'def ghi'jkl"]);
    }

    #[test]
    fn continuation_collapses_to_single_line_form() {
        let multi = "curl \\\n    -X PUT \\\n    'https://example.com' \\\n    -d 'x'";
        let single = "curl -X PUT 'https://example.com' -d 'x'";
        assert_eq!(tokenize(multi), tokenize(single));
    }

    #[test]
    fn continuation_accepts_crlf() {
        let multi = "curl \\\r\n  https://example.com";
        assert_eq!(tokenize(multi), vec!["curl", "https://example.com"]);
    }

    #[test]
    fn unterminated_quote_swallows_rest_of_line() {
        let tokens = tokenize("curl 'https://example.com -X POST");
        assert_eq!(tokens, vec!["curl", "'https://example.com -X POST"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn backslash_without_newline_is_kept() {
        let tokens = tokenize(r"curl C:\path\to\file");
        assert_eq!(tokens, vec!["curl", r"C:\path\to\file"]);
    }

    #[test]
    fn newlines_inside_quotes_survive() {
        let tokens = tokenize("curl -d 'line one\nline two'");
        assert_eq!(tokens[2], "'line one\nline two'");
    }
}
