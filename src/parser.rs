//! Semantic stage of the curl pipeline: scans the token stream into a
//! [`RequestModel`].
//!
//! Parsing is best effort. Unrecognized flags are skipped without consuming
//! an argument, garbled input still yields whatever could be extracted, and
//! input that is not a curl command at all is reported as
//! [`ParseOutcome::Unchanged`] so callers can leave their prior field values
//! alone.

use std::str::FromStr;

use crate::error::{Error, NotCurlSnafu, Result};
use crate::tokenizer::tokenize;
use crate::{Method, RequestModel};

/// Tagged result of a parse attempt. `Unchanged` means the input did not
/// parse as a curl command and the caller should keep its current state.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed(RequestModel),
    Unchanged,
}

/// Parses curl command text into a [`RequestModel`].
///
/// The first token must be the literal program name `curl` (any case);
/// anything else yields [`ParseOutcome::Unchanged`]. Never panics and never
/// returns an error: partial or malformed commands produce a model with
/// whatever fields could be extracted.
pub fn parse_curl(input: &str) -> ParseOutcome {
    let mut tokens = tokenize(input).into_iter();
    match tokens.next() {
        Some(program) if program.eq_ignore_ascii_case("curl") => {}
        _ => return ParseOutcome::Unchanged,
    }

    let mut model = RequestModel::default();
    let mut explicit_method = false;

    while let Some(token) = tokens.next() {
        match token.as_str() {
            "-X" | "--request" => {
                if let Some(value) = tokens.next() {
                    // A verb outside the builder's set is skipped, last
                    // accepted occurrence wins.
                    if let Ok(method) = strip_quotes(&value).parse() {
                        model.method = method;
                        explicit_method = true;
                    }
                }
            }
            "-H" | "--header" => {
                if let Some(value) = tokens.next() {
                    // Split on the first colon only; a pair without one is
                    // a no-op. Repeated names overwrite in place and keep
                    // their first-occurrence position.
                    if let Some((name, value)) = strip_quotes(&value).split_once(':') {
                        model
                            .headers
                            .insert(name.trim().to_string(), value.trim().to_string());
                    }
                }
            }
            "-d" | "--data" | "--data-raw" | "--data-binary" | "--data-ascii" => {
                if let Some(value) = tokens.next() {
                    model.body = strip_quotes(&value).to_string();
                    // curl's own inference: data implies POST unless -X
                    // already said otherwise.
                    if !explicit_method {
                        model.method = Method::Post;
                    }
                }
            }
            flag if flag.starts_with('-') => {}
            _ if model.url.is_empty() => {
                model.url = strip_quotes(&token).to_string();
            }
            _ => {}
        }
    }

    ParseOutcome::Parsed(model)
}

impl FromStr for RequestModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match parse_curl(s) {
            ParseOutcome::Parsed(model) => Ok(model),
            ParseOutcome::Unchanged => NotCurlSnafu.fail(),
        }
    }
}

/// Removes one leading and one trailing quote character independently, so
/// an unterminated-quote token still sheds its opening quote.
pub(crate) fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix(['\'', '"']).unwrap_or(s);
    s.strip_suffix(['\'', '"']).unwrap_or(s)
}
