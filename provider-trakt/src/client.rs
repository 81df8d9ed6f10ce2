//! Trakt list fetcher.

use crate::error::{Result, TraktError};
use crate::http::{HttpClient, HttpRequest};
use crate::types::TraktList;
use core_auth::TokenProvider;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Trakt API base URL
pub const TRAKT_API_BASE: &str = "https://api.trakt.tv";

/// Request timeout for list fetches
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-only client for a user's Trakt lists.
///
/// Obtains a credential from the injected [`TokenProvider`] and issues a
/// single GET per fetch; no retry is performed at this layer.
pub struct TraktClient {
    http: Arc<dyn HttpClient>,
    tokens: Arc<dyn TokenProvider>,
    api_base: String,
}

impl TraktClient {
    pub fn new(http: Arc<dyn HttpClient>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            http,
            tokens,
            api_base: TRAKT_API_BASE.to_string(),
        }
    }

    /// Override the API base URL (tests, mirrors).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Fetch all lists owned by `username`.
    ///
    /// # Errors
    ///
    /// - [`TraktError::Auth`] when no credential is obtainable
    /// - [`TraktError::Api`] on a non-2xx status, carrying the status code
    /// - [`TraktError::Parse`] when the body is not the expected JSON array
    /// - [`TraktError::Network`] on transport failure
    #[instrument(skip(self))]
    pub async fn fetch_lists(&self, username: &str) -> Result<Vec<TraktList>> {
        let token = self.tokens.ensure_auth().await?;

        let mut request = HttpRequest::new(format!(
            "{}/users/{}/lists",
            self.api_base, username
        ))
        .timeout(FETCH_TIMEOUT);
        for (key, value) in self.tokens.headers_for(&token) {
            request = request.header(key, value);
        }

        let response = self.http.get(request).await?;
        if !response.is_success() {
            warn!(status = response.status, "Trakt list fetch failed");
            return Err(TraktError::Api {
                status_code: response.status,
            });
        }

        let lists: Vec<TraktList> = serde_json::from_slice(&response.body)
            .map_err(|e| TraktError::Parse(e.to_string()))?;

        info!(count = lists.len(), "fetched Trakt lists");
        Ok(lists)
    }
}
