//! Error handling module for the retreat client.
//!
//! Provides a single error type for every action, with stable error codes for the
//! presentation layer to branch on.

use reqwest::StatusCode;

use crate::models::EntityKind;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const HTTP_ERROR: &str = "HTTP_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Client error type.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network or transport failure; no response was received.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Http { status: StatusCode, message: String },

    /// The backend confirmed the resource does not exist.
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: i64 },

    /// Client-side validation rejected the request before it was sent.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The response body could not be decoded.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// Runtime configuration is malformed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => codes::TRANSPORT_ERROR,
            ClientError::Http { .. } => codes::HTTP_ERROR,
            ClientError::NotFound { .. } => codes::NOT_FOUND,
            ClientError::Validation(_) => codes::VALIDATION_ERROR,
            ClientError::Decode(_) => codes::DECODE_ERROR,
            ClientError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// HTTP status carried by the error, if the backend produced one.
    pub fn http_status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            ClientError::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            tracing::error!("Decode error: {:?}", err);
            return ClientError::Decode(err.to_string());
        }
        tracing::error!("Transport error: {:?}", err);
        ClientError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ClientError::Decode(format!("JSON error: {}", err))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
