//! One builder session: the editable request fields plus the single result
//! slot the UI binds to.
//!
//! Field edits bypass the parser and mutate the session directly; the
//! headers field is plain JSON text while editing and only becomes an
//! ordered map when an execution begins, so malformed headers JSON is a
//! valid (if unexecutable) editing state.
//!
//! Completions are keyed by a monotonically increasing generation id.
//! Nothing cancels an in-flight call when the user executes again, so two
//! completions can race for the slot; the id makes the slot keep only the
//! newest one instead of the last writer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::detect::{InputMode, detect_mode};
use crate::error::{Error, HeaderFormatSnafu, Result};
use crate::parser::{ParseOutcome, parse_curl};
use crate::response::ResponseModel;
use crate::{CorsMode, Method, RequestModel};

/// The headers field as the UI edits it.
///
/// Stays `RawText` through arbitrary edits and transitions to an ordered
/// map only when an execution resolves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HeaderField {
    RawText(String),
    Parsed(IndexMap<String, String>),
}

impl Default for HeaderField {
    fn default() -> Self {
        Self::RawText("{}".to_string())
    }
}

impl HeaderField {
    /// Resolves the field into the ordered mapping form.
    ///
    /// The text must be a flat JSON object of string to string; anything
    /// else fails with the header-format error and no request is made.
    pub fn resolve(&self) -> Result<IndexMap<String, String>> {
        match self {
            Self::Parsed(map) => Ok(map.clone()),
            Self::RawText(text) => serde_json::from_str(text).context(HeaderFormatSnafu),
        }
    }
}

/// A snapshot handed out by [`BuilderSession::begin`], consumed by one
/// executor invocation.
#[derive(Debug, Clone)]
pub struct Execution {
    pub id: u64,
    pub request: RequestModel,
    pub mode: CorsMode,
}

/// Terminal state of one execution attempt. Failures carry a single
/// human-readable message; nothing is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    Completed(ResponseModel),
    Failed(String),
}

/// State for one interactive builder session.
///
/// Executing again discards the previous result; no history is retained.
#[derive(Debug, Default)]
pub struct BuilderSession {
    pub method: Method,
    pub url: String,
    pub headers: HeaderField,
    pub body: String,
    pub mode: CorsMode,
    next_id: u64,
    pending: u32,
    slot: Option<(u64, ExecutionOutcome)>,
}

impl BuilderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes an edit of the free-text field.
    ///
    /// Text whose leading token is `curl` is re-parsed from scratch; when
    /// that yields a model, it overwrites method, URL, headers and body,
    /// with the headers re-serialized as formatted JSON text and a JSON
    /// body pretty-printed for display. A failed parse is a silent no-op.
    /// Anything else is taken verbatim as the URL, leaving the other
    /// fields untouched.
    pub fn set_free_text(&mut self, text: &str) {
        match detect_mode(text) {
            InputMode::CurlCommand => {
                if let ParseOutcome::Parsed(model) = parse_curl(text) {
                    self.method = model.method;
                    self.url = model.url;
                    self.headers = HeaderField::RawText(headers_text(&model.headers));
                    self.body = if model.body.is_empty() {
                        String::new()
                    } else {
                        pretty_json(&model.body).unwrap_or(model.body)
                    };
                }
            }
            InputMode::RawUrl => self.url = text.to_string(),
        }
    }

    /// Starts an execution: validates the headers, bumps the generation
    /// counter and snapshots the request fields.
    ///
    /// A header-format failure is recorded in the result slot and returned;
    /// no [`Execution`] exists in that case, so no network call can happen.
    pub fn begin(&mut self) -> Result<Execution> {
        let headers = match self.headers.resolve() {
            Ok(headers) => headers,
            Err(err) => {
                let id = self.bump();
                self.slot = Some((id, ExecutionOutcome::Failed(err.to_string())));
                return Err(err);
            }
        };
        let id = self.bump();
        self.pending += 1;
        Ok(Execution {
            id,
            request: RequestModel {
                method: self.method,
                url: self.url.clone(),
                headers,
                body: self.body.clone(),
            },
            mode: self.mode,
        })
    }

    /// Records the outcome of execution `id`.
    ///
    /// A completion older than the one already displayed is discarded.
    /// Returns whether the outcome was kept.
    pub fn complete(&mut self, id: u64, outcome: Result<ResponseModel, Error>) -> bool {
        self.pending = self.pending.saturating_sub(1);
        if let Some((shown, _)) = &self.slot {
            if *shown >= id {
                return false;
            }
        }
        let outcome = match outcome {
            Ok(response) => ExecutionOutcome::Completed(response),
            Err(err) => ExecutionOutcome::Failed(err.to_string()),
        };
        self.slot = Some((id, outcome));
        true
    }

    pub fn in_progress(&self) -> bool {
        self.pending > 0
    }

    /// The response of the newest completed execution, if it succeeded.
    pub fn response(&self) -> Option<&ResponseModel> {
        match &self.slot {
            Some((_, ExecutionOutcome::Completed(response))) => Some(response),
            _ => None,
        }
    }

    /// The failure message of the newest completed execution, if it failed.
    pub fn error(&self) -> Option<&str> {
        match &self.slot {
            Some((_, ExecutionOutcome::Failed(message))) => Some(message),
            _ => None,
        }
    }

    fn bump(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

fn headers_text(headers: &IndexMap<String, String>) -> String {
    match serde_json::to_string_pretty(headers) {
        Ok(text) => text,
        Err(_) => "{}".to_string(),
    }
}

/// Re-serializes JSON text with stable 2-space indentation; `None` when the
/// text is not JSON.
pub(crate) fn pretty_json(text: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    serde_json::to_string_pretty(&value).ok()
}
