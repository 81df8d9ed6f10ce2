//! HTTP client abstraction.
//!
//! A GET-only seam over the underlying HTTP stack so the Trakt client can be
//! exercised in tests without a network. The production implementation is
//! [`ReqwestHttpClient`].

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Transport-level HTTP failure (connection, TLS, timeout).
#[derive(Error, Debug)]
#[error("Network error: {0}")]
pub struct HttpError(pub String);

/// A GET request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            timeout: None,
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }
}

/// An HTTP response with the body fully read.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async HTTP client seam.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Execute a GET request, returning the response whatever its status.
    ///
    /// # Errors
    ///
    /// Fails only on transport-level problems; HTTP error statuses come back
    /// as a normal [`HttpResponse`] for the caller to interpret.
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Reqwest-based HTTP client implementation.
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a client with the default 30 second timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("kometa-trakt-sync/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        debug!(url = %request.url, "executing GET request");

        let mut req = self.client.get(&request.url);
        for (key, value) in request.headers {
            req = req.header(key, value);
        }
        if let Some(timeout) = request.timeout {
            req = req.timeout(timeout);
        }

        let response = req.send().await.map_err(|e| HttpError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError(e.to_string()))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}
