//! HTTP client for network-based API calls
//!
//! One attempt per call: no retry, no backoff. A timeout applies only when
//! one was configured.

use crate::{ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client bound to one service host
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client with its own connection pool
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        Ok(Self::with_client(build_client(timeout)?, base_url))
    }

    /// Create a client that shares an existing connection pool
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Make a GET request and parse the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request and return the body as text
    pub async fn get_text(&self, path: &str) -> ClientResult<String> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        Ok(Self::check_status(response).await?.text().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body and return the body as text
    pub async fn post_empty_text(&self, path: &str) -> ClientResult<String> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(&url).send().await?;
        Ok(Self::check_status(response).await?.text().await?)
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(error = %e, "Response body does not match the expected shape");
            ClientError::InvalidResponse(e.to_string())
        })
    }

    /// Turn a non-success status into an error carrying the body
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        tracing::warn!(%status, body = %text, "Service returned an error");
        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
            StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
            _ => Err(ClientError::Internal(text)),
        }
    }
}

/// Build the shared reqwest client
pub(crate) fn build_client(timeout: Option<Duration>) -> ClientResult<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
