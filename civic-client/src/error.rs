//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Domain error from the shared core (validation, parsing, ranges)
    #[error(transparent)]
    App(#[from] AppError),

    /// Issue not on the board
    #[error("Issue not found: {0}")]
    NotFound(i64),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Flatten into the shared error so it can go out in an `ApiResponse`
    pub fn into_app_error(self) -> AppError {
        match self {
            Self::App(err) => err,
            Self::NotFound(id) => AppError::issue_not_found(id),
            Self::Config(msg) => AppError::with_message(ErrorCode::ConfigError, msg),
            Self::Serialization(e) => {
                AppError::with_message(ErrorCode::SerializationError, e.to_string())
            }
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
