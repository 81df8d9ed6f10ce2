use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No Trakt access token available")]
    NotAuthenticated,

    #[error("Invalid credential: {0}")]
    InvalidCredential(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;
