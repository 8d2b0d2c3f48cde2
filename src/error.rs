//! Error types for the Krystal CLI

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with a non-success status. The message is taken
    /// verbatim from the response body when it carries one.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("authentication required: {0}")]
    Auth(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status code, if the failure came from the remote API.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
