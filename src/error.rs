//! Error types for the Omise client

use crate::types::ApiErrorBody;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Result type alias for Omise operations
pub type Result<T> = std::result::Result<T, OmiseError>;

/// Main error type for Omise operations
#[derive(Error, Debug)]
pub enum OmiseError {
    /// Required key is missing or the client is misconfigured.
    /// Raised before any request is sent.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The API answered with anything other than `200 OK`
    #[error("API error ({status}): {body}")]
    Api { status: StatusCode, body: Value },

    /// No response was obtained (connection refused, DNS failure, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configured value cannot be sent as an HTTP header
    #[error("Invalid header: {message}")]
    InvalidHeader { message: String },
}

impl OmiseError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an API error from a status and the response body
    pub fn api(status: StatusCode, body: Value) -> Self {
        Self::Api { status, body }
    }

    /// Create an invalid header error
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Whether this error was raised before any request was sent
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Whether the remote API rejected the request
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Whether the request never got a response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// HTTP status of an API error, or the status carried by a transport
    /// error when reqwest recorded one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Decode the body of an API error into the documented error shape.
    ///
    /// Returns `None` for other variants or when the body does not look
    /// like an Omise error object.
    pub fn api_error(&self) -> Option<ApiErrorBody> {
        match self {
            Self::Api { body, .. } => serde_json::from_value(body.clone()).ok(),
            _ => None,
        }
    }
}
