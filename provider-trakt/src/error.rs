//! Error types for the Trakt provider

use crate::http::HttpError;
use thiserror::Error;

/// Trakt provider errors
#[derive(Error, Debug)]
pub enum TraktError {
    /// No credential was obtainable from the token provider
    #[error("Authentication failed: {0}")]
    Auth(#[from] core_auth::AuthError),

    /// API request returned a non-success status
    #[error("Trakt API error (status {status_code})")]
    Api { status_code: u16 },

    /// Failed to decode an API response
    #[error("Failed to parse Trakt API response: {0}")]
    Parse(String),

    /// Transport-level failure
    #[error(transparent)]
    Network(#[from] HttpError),
}

/// Result type for Trakt operations
pub type Result<T> = std::result::Result<T, TraktError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status() {
        let error = TraktError::Api { status_code: 503 };
        assert_eq!(error.to_string(), "Trakt API error (status 503)");
    }
}
