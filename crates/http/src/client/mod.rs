//! Playforge storefront API client

pub mod auth;
pub mod error;

use crate::types::ApiErrorBody;
use error::ClientError;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

/// Storefront API client
///
/// Holds the base URL and the underlying connection pool; it is cheap to
/// clone. The client itself is credential-free: callers pass the bearer
/// token per request, so it never owns or reads token storage.
#[derive(Clone, Debug)]
pub struct StoreClient {
    client: Client,
    base_url: String,
}

impl StoreClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> StoreClientBuilder {
        StoreClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Create a request builder carrying a bearer token
    pub fn authorized_request(
        &self,
        method: reqwest::Method,
        path: &str,
        token: &str,
    ) -> reqwest::RequestBuilder {
        self.request(method, path)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
    }

    /// Execute a request and handle common errors
    ///
    /// Success bodies deserialize into `T`. Non-2xx bodies are parsed as the
    /// backend's error shape and surfaced through [`ClientError::from_status`]
    /// with the body's `message`, falling back to the HTTP status text when
    /// the body is absent or malformed. Transport failures and undecodable
    /// success bodies map to [`ClientError::Request`].
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            tracing::debug!(status = status.as_u16(), %message, "api request failed");
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for [`StoreClient`]
#[derive(Default)]
pub struct StoreClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl StoreClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<StoreClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?
            .trim_end_matches('/')
            .to_string();

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new().user_agent("playforge-client/0.1.0");
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = self.timeout; // Timeouts not supported on WASM
            ClientBuilder::new()
                .user_agent("playforge-client/0.1.0")
                .build()?
        };

        Ok(StoreClient { client, base_url })
    }
}
