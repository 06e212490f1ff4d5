//! An HTTP request workbench: bidirectional conversion between curl command
//! text and a structured [`RequestModel`], plus an execution pipeline that
//! turns the model into a live request and normalizes the response.
//!
//! This crate backs an interactive request-builder surface: a user types
//! either a bare URL or pastes a shell-style curl invocation, the input is
//! normalized into a [`RequestModel`], executed against a live endpoint, and
//! can be serialized back into curl text for sharing.
//!
//! # Design Goals
//!
//! - **Fidelity**: reproduce curl's own inference rules (data implies POST,
//!   explicit `-X` wins, header split on the first colon)
//! - **Best effort**: malformed or partially typed curl text never aborts
//!   parsing; the parser reports [`ParseOutcome::Unchanged`] instead of
//!   raising, and callers keep their prior field values
//! - **Round trips**: `parse(generate(m)) == m` for any model whose values
//!   are free of embedded single quotes
//!
//! # Architecture
//!
//! The crate is a pipeline of small components:
//!
//! 1. **Tokenizer**: a Pest grammar splits raw text into shell-like tokens,
//!    respecting quoting and line continuations
//! 2. **Parser**: scans the tokens left to right into a [`RequestModel`]
//! 3. **Generator**: the inverse transform, back to curl text
//! 4. **Detector / session**: [`BuilderSession`] routes free-text edits to
//!    the parser or the URL field and tracks execution results
//! 5. **Executor** (requires the `reqwest` feature): dispatches the model
//!    under a chosen cross-origin policy
//! 6. **Normalizer**: shapes the transport response into a [`ResponseModel`]
//!
//! # Examples
//!
//! Parsing a curl command:
//!
//! ```
//! use curl_workbench::{Method, RequestModel};
//! use std::str::FromStr;
//! # fn main() -> Result<(), curl_workbench::Error> {
//! let curl = r#"curl https://api.example.com/users \
//!     -H 'Accept: application/json' \
//!     -d '{"name": "John Doe"}'"#;
//! let model = RequestModel::from_str(curl)?;
//! assert_eq!(model.method, Method::Post);
//! # Ok(())
//! # }
//! ```
//!
//! Generating curl text from a model:
//!
//! ```
//! use curl_workbench::RequestModel;
//! let mut model = RequestModel::default();
//! model.url = "https://api.example.com/users".into();
//! assert_eq!(model.to_curl(), "curl 'https://api.example.com/users' -X GET");
//! ```
//!
//! Executing a model (requires the `reqwest` feature):
//!
//! ```
//! # #[cfg(feature = "reqwest")]
//! # async fn example() -> Result<(), curl_workbench::Error> {
//! use curl_workbench::{ExecuteOptions, RequestModel, execute};
//! use std::str::FromStr;
//!
//! let model = RequestModel::from_str("curl https://api.example.com/health")?;
//! let response = execute(&model, &ExecuteOptions::default()).await?;
//! println!("{} {}", response.status, response.status_text);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "reqwest")]
mod client;
mod detect;
pub(crate) mod error;
#[cfg(feature = "reqwest")]
mod executor;
mod generator;
mod parser;
mod response;
mod session;
mod tokenizer;

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[cfg(feature = "reqwest")]
pub use client::ApiClient;
pub use detect::{InputMode, detect_mode};
pub use error::Error;
#[cfg(feature = "reqwest")]
pub use executor::{DEFAULT_ORIGIN, ExecuteOptions, execute};
pub use parser::{ParseOutcome, parse_curl};
pub use response::{ResponseBody, ResponseModel, ResponseStatus};
pub use session::{BuilderSession, Execution, ExecutionOutcome, HeaderField};
pub use tokenizer::tokenize;

/// The verb set exposed by the request builder.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether the builder materializes a body into the network payload.
    pub(crate) fn takes_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let method = match s {
            m if m.eq_ignore_ascii_case("GET") => Method::Get,
            m if m.eq_ignore_ascii_case("POST") => Method::Post,
            m if m.eq_ignore_ascii_case("PUT") => Method::Put,
            m if m.eq_ignore_ascii_case("PATCH") => Method::Patch,
            m if m.eq_ignore_ascii_case("DELETE") => Method::Delete,
            other => {
                return error::UnsupportedMethodSnafu { method: other }.fail();
            }
        };
        Ok(method)
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Patch => http::Method::PATCH,
            Method::Delete => http::Method::DELETE,
        }
    }
}

/// Cross-origin policy for one execution.
///
/// `Opaque` reproduces the `no-cors` contract of browser fetch semantics:
/// the call is made but the response content is intentionally inaccessible,
/// so the executor fabricates a fixed placeholder instead of reading it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorsMode {
    #[default]
    Standard,
    Opaque,
}

/// Canonical structured form of an HTTP request.
///
/// Headers are kept in insertion order with the name case preserved as
/// typed; writing to an existing name overwrites the value in place, which
/// matches curl's own last-value-wins handling of repeated `-H` flags. The
/// URL is not validated here; that is deferred to the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestModel {
    pub method: Method,
    pub url: String,
    pub headers: IndexMap<String, String>,
    pub body: String,
}

impl Default for RequestModel {
    fn default() -> Self {
        Self {
            method: Method::Get,
            url: String::new(),
            headers: IndexMap::with_capacity(8), // Pre-allocate for typical header count
            body: String::new(),
        }
    }
}
