//! Generic HTTP-verb client used by the data-bound pages around the
//! builder.
//!
//! Conventions shared with those pages: JSON request and response bodies by
//! default, bearer-token injection when a token is configured, and a
//! uniform failure contract where any non-2xx status becomes an error
//! carrying the status text.

use std::fmt::Display;

use http::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use tracing::{debug, warn};

use crate::error::{DecodePayloadSnafu, Result, TransportSnafu, UnexpectedStatusSnafu};

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            client: reqwest::Client::new(),
        }
    }

    /// Configures a bearer token, injected as `Authorization: Bearer <tok>`
    /// on every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let request = self.request(http::Method::GET, endpoint);
        Self::handle(request.send().await.context(TransportSnafu)?).await
    }

    pub async fn get_by_id<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        id: impl Display,
    ) -> Result<T> {
        let request = self.request(http::Method::GET, &format!("{endpoint}/{id}"));
        Self::handle(request.send().await.context(TransportSnafu)?).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        data: &impl Serialize,
    ) -> Result<T> {
        let request = self.request(http::Method::POST, endpoint).json(data);
        Self::handle(request.send().await.context(TransportSnafu)?).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        id: impl Display,
        data: &impl Serialize,
    ) -> Result<T> {
        let request = self
            .request(http::Method::PUT, &format!("{endpoint}/{id}"))
            .json(data);
        Self::handle(request.send().await.context(TransportSnafu)?).await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        id: impl Display,
        data: &impl Serialize,
    ) -> Result<T> {
        let request = self
            .request(http::Method::PATCH, &format!("{endpoint}/{id}"))
            .json(data);
        Self::handle(request.send().await.context(TransportSnafu)?).await
    }

    pub async fn delete(&self, endpoint: &str, id: impl Display) -> Result<()> {
        let request = self.request(http::Method::DELETE, &format!("{endpoint}/{id}"));
        let response = request.send().await.context(TransportSnafu)?;
        Self::check_status(&response)?;
        Ok(())
    }

    /// Submits a multipart form. No Content-Type is set here so the
    /// transport can pick its own boundary.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let mut request = self
            .client
            .post(format!("{}{}", self.base_url, endpoint))
            .multipart(form);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        Self::handle(request.send().await.context(TransportSnafu)?).await
    }

    fn request(&self, method: http::Method, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%method, %url, "api call");
        let mut request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn handle<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        Self::check_status(&response)?;
        response.json().await.context(DecodePayloadSnafu)
    }

    fn check_status(response: &reqwest::Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %response.url(), "api call failed");
            return UnexpectedStatusSnafu {
                status: status.canonical_reason().unwrap_or("Unknown"),
            }
            .fail();
        }
        Ok(())
    }
}
