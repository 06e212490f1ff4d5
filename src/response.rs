//! Response model and normalizer: decodes and shapes raw transport data
//! into a displayable form.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use snafu::ResultExt;

use crate::error::{DecodeBodySnafu, Result};

/// Placeholder reason string for opaque (no-cors) results.
const OPAQUE_STATUS_TEXT: &str = "Request completed in no-cors mode";
/// Placeholder body for opaque results, whose real content is unreadable by
/// design.
const OPAQUE_BODY: &str = "Response content not available in no-cors mode";

/// Numeric HTTP status, or the sentinel for an opaque result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Code(u16),
    Opaque,
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Opaque => f.write_str("Success"),
        }
    }
}

impl Serialize for ResponseStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Code(code) => serializer.serialize_u16(*code),
            Self::Opaque => serializer.serialize_str("Success"),
        }
    }
}

/// Decoded response payload: structured data when the content decodes as
/// JSON, raw text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

impl ResponseBody {
    /// Two-tier decode of a response payload.
    ///
    /// A content type indicating JSON decodes strictly and a broken payload
    /// is an error. Any other (or absent) content type is read as text with
    /// an opportunistic JSON decode on top, so a server mislabeling JSON as
    /// `text/plain` still yields structured data while genuine text passes
    /// through unchanged.
    pub fn decode(content_type: Option<&str>, text: String) -> Result<Self> {
        match content_type {
            Some(ct) if ct.contains("application/json") => {
                Ok(Self::Json(serde_json::from_str(&text).context(DecodeBodySnafu)?))
            }
            _ => Ok(match serde_json::from_str(&text) {
                Ok(value) => Self::Json(value),
                Err(_) => Self::Text(text),
            }),
        }
    }
}

/// Canonical structured form of an HTTP response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseModel {
    pub status: ResponseStatus,
    #[serde(rename = "statusText")]
    pub status_text: String,
    pub headers: IndexMap<String, String>,
    pub body: ResponseBody,
}

impl ResponseModel {
    /// The fixed placeholder returned for every opaque-mode execution.
    pub fn opaque() -> Self {
        Self {
            status: ResponseStatus::Opaque,
            status_text: OPAQUE_STATUS_TEXT.to_string(),
            headers: IndexMap::new(),
            body: ResponseBody::Text(OPAQUE_BODY.to_string()),
        }
    }
}

#[cfg(feature = "reqwest")]
impl ResponseModel {
    /// Normalizes a transport response: status plus reason phrase, headers
    /// collected into the ordered mapping, body via [`ResponseBody::decode`].
    pub async fn from_transport(response: reqwest::Response) -> Result<Self> {
        use crate::error::ReadBodySnafu;
        use http::header::CONTENT_TYPE;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();

        let mut headers = IndexMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.to_string(), value.to_string());
            }
        }
        let content_type = headers.get(CONTENT_TYPE.as_str()).cloned();

        let text = response.text().await.context(ReadBodySnafu)?;
        let body = ResponseBody::decode(content_type.as_deref(), text)?;

        Ok(Self {
            status: ResponseStatus::Code(status.as_u16()),
            status_text,
            headers,
            body,
        })
    }
}
