//! The credential collaborator seam.

use crate::error::{AuthError, Result};
use crate::types::AccessToken;
use async_trait::async_trait;
use std::collections::HashMap;

/// Trakt API version sent with every request.
pub const TRAKT_API_VERSION: &str = "2";

/// Supplies a bearer credential on request and turns it into headers.
///
/// Implementations may refresh tokens, prompt device flows, or read from
/// secure storage; this core only requires that `ensure_auth` either yields
/// a usable token or fails with [`AuthError::NotAuthenticated`].
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Obtain a valid access token, or fail if none is obtainable.
    async fn ensure_auth(&self) -> Result<AccessToken>;

    /// Build the request headers for an authenticated Trakt call.
    fn headers_for(&self, token: &AccessToken) -> HashMap<String, String>;
}

/// Token provider backed by credentials already present in configuration.
///
/// No refresh, no interaction: `ensure_auth` succeeds only when a token was
/// configured up front.
pub struct StaticTokenProvider {
    access_token: Option<AccessToken>,
    client_id: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(access_token: Option<String>, client_id: Option<String>) -> Self {
        Self {
            access_token: access_token.map(AccessToken::new),
            client_id,
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn ensure_auth(&self) -> Result<AccessToken> {
        self.access_token.clone().ok_or(AuthError::NotAuthenticated)
    }

    fn headers_for(&self, token: &AccessToken) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", token.as_str()),
        );
        headers.insert(
            "Content-Type".to_string(),
            "application/json".to_string(),
        );
        headers.insert(
            "trakt-api-version".to_string(),
            TRAKT_API_VERSION.to_string(),
        );
        if let Some(client_id) = &self.client_id {
            headers.insert("trakt-api-key".to_string(), client_id.clone());
        }
        headers
    }
}
