//! Dispatches a [`RequestModel`] over the network and routes the result
//! through the response normalizer.

use std::str::FromStr;

use http::header::{HeaderMap, HeaderName, HeaderValue, ORIGIN};
use snafu::ResultExt;
use tracing::debug;

use crate::error::{
    BuildClientSnafu, ParseHeaderNameSnafu, ParseHeaderValueSnafu, Result, TransportSnafu,
};
use crate::response::ResponseModel;
use crate::{CorsMode, RequestModel};

/// Origin value stamped onto outgoing requests by default.
///
/// The tool this crate backs demonstrates origin spoofing against a fixed
/// site; it is a demonstration quirk, not a security feature, and can be
/// disabled by clearing [`ExecuteOptions::origin`].
pub const DEFAULT_ORIGIN: &str = "https://www.smythstoys.com";

/// Per-execution configuration.
///
/// The defaults reproduce the builder's historical hardcoded behavior:
/// standard CORS visibility, the fixed `Origin` override, and cookies sent
/// with every request (a `credentials: include` equivalent).
#[derive(Debug, Clone)]
pub struct ExecuteOptions {
    pub mode: CorsMode,
    /// When set, injected as the `Origin` header, overwriting any header of
    /// that name on the model.
    pub origin: Option<String>,
    pub include_credentials: bool,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self {
            mode: CorsMode::Standard,
            origin: Some(DEFAULT_ORIGIN.to_string()),
            include_credentials: true,
        }
    }
}

/// Executes one request described by the model.
///
/// A body is materialized only for POST and PUT: body text that parses as
/// JSON is sent as its compact canonical re-serialization, anything else is
/// sent verbatim. Transport failures are terminal for the invocation; a
/// non-2xx status is not a failure and comes back as a normalized response
/// with its real status code. In opaque mode the transport response is
/// discarded and the fixed placeholder is returned instead, because opaque
/// responses are unreadable by design.
pub async fn execute(model: &RequestModel, options: &ExecuteOptions) -> Result<ResponseModel> {
    let headers = build_headers(model, options)?;

    let client = reqwest::Client::builder()
        .cookie_store(options.include_credentials)
        .build()
        .context(BuildClientSnafu)?;

    let mut builder = client
        .request(model.method.into(), model.url.as_str())
        .headers(headers);

    if model.method.takes_body() && !model.body.is_empty() {
        builder = builder.body(materialize_body(&model.body));
    }

    debug!(method = %model.method, url = %model.url, mode = ?options.mode, "dispatching request");
    let response = builder.send().await.context(TransportSnafu)?;

    if options.mode == CorsMode::Opaque {
        return Ok(ResponseModel::opaque());
    }

    debug!(status = response.status().as_u16(), "response received");
    ResponseModel::from_transport(response).await
}

fn build_headers(model: &RequestModel, options: &ExecuteOptions) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(model.headers.len() + 1);
    for (name, value) in &model.headers {
        headers.insert(
            HeaderName::from_str(name).context(ParseHeaderNameSnafu)?,
            HeaderValue::from_str(value).context(ParseHeaderValueSnafu)?,
        );
    }
    if let Some(origin) = &options.origin {
        headers.insert(ORIGIN, HeaderValue::from_str(origin).context(ParseHeaderValueSnafu)?);
    }
    Ok(headers)
}

/// JSON body text is canonicalized before dispatch; non-JSON text goes out
/// verbatim. The fallback is silent on purpose.
fn materialize_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value.to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use crate::Method;

    #[test]
    fn json_body_is_canonicalized() {
        assert_eq!(materialize_body("{ \"a\" : 1 }"), r#"{"a":1}"#);
    }

    #[test]
    fn non_json_body_goes_out_verbatim() {
        assert_eq!(materialize_body("not-json-at-all"), "not-json-at-all");
    }

    #[test]
    fn origin_override_replaces_model_header() {
        let mut headers = IndexMap::new();
        headers.insert("Origin".to_string(), "https://spoofed.example".to_string());
        let model = RequestModel {
            method: Method::Get,
            url: "https://example.com".to_string(),
            headers,
            body: String::new(),
        };
        let built = build_headers(&model, &ExecuteOptions::default()).unwrap();
        assert_eq!(
            built.get(ORIGIN).and_then(|v| v.to_str().ok()),
            Some(DEFAULT_ORIGIN)
        );
    }

    #[test]
    fn origin_injection_can_be_disabled() {
        let model = RequestModel::default();
        let options = ExecuteOptions {
            origin: None,
            ..Default::default()
        };
        let built = build_headers(&model, &options).unwrap();
        assert!(built.get(ORIGIN).is_none());
    }

    #[test]
    fn invalid_header_name_is_reported() {
        let mut headers = IndexMap::new();
        headers.insert("bad name".to_string(), "v".to_string());
        let model = RequestModel {
            headers,
            ..Default::default()
        };
        let err = build_headers(&model, &ExecuteOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse header name");
    }
}
