use snafu::Snafu;

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Invalid headers JSON format"))]
    HeaderFormat { source: serde_json::Error },

    #[snafu(display("Unsupported HTTP method: {method}"))]
    UnsupportedMethod { method: String },

    #[snafu(display("Input is not a curl command"))]
    NotCurl,

    #[snafu(display("Failed to decode response body as JSON"))]
    DecodeBody { source: serde_json::Error },

    #[snafu(display("Failed to parse header name"))]
    ParseHeaderName {
        source: http::header::InvalidHeaderName,
    },
    #[snafu(display("Failed to parse header value"))]
    ParseHeaderValue {
        source: http::header::InvalidHeaderValue,
    },

    #[cfg(feature = "reqwest")]
    #[snafu(display("Failed to build HTTP client"))]
    BuildClient { source: reqwest::Error },

    #[cfg(feature = "reqwest")]
    #[snafu(display("Failed to execute request: {source}"))]
    Transport { source: reqwest::Error },

    #[cfg(feature = "reqwest")]
    #[snafu(display("Failed to read response body"))]
    ReadBody { source: reqwest::Error },

    #[cfg(feature = "reqwest")]
    #[snafu(display("Failed to decode response payload"))]
    DecodePayload { source: reqwest::Error },

    #[cfg(feature = "reqwest")]
    #[snafu(display("{status}"))]
    UnexpectedStatus { status: String },
}
