use provider_trakt::TraktError;
use thiserror::Error;

/// Sync failure taxonomy.
///
/// Internal operations return these typed errors; every public operation
/// converts them to a boolean-plus-log at the boundary, so no error value
/// ever crosses into caller code.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Authentication failed: {0}")]
    Auth(#[from] core_auth::AuthError),

    #[error("Remote list fetch failed (status {status_code})")]
    RemoteFetch { status_code: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed document: {0}")]
    Parse(String),

    #[error("Trakt username is not configured")]
    MissingUsername,
}

impl From<TraktError> for SyncError {
    fn from(error: TraktError) -> Self {
        match error {
            TraktError::Auth(e) => SyncError::Auth(e),
            TraktError::Api { status_code } => SyncError::RemoteFetch { status_code },
            TraktError::Parse(msg) => SyncError::Parse(msg),
            TraktError::Network(e) => SyncError::Network(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
