//! Errors surfaced by calls to the admin backend.

use thiserror::Error;

/// Failure of a single backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// `message` field of the JSON error body, if one could be read.
        message: Option<String>,
    },
    /// A success response whose body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(status: u16, message: Option<String>) -> Self {
        Self::Status { status, message }
    }

    /// The server-provided message, when it carries any text.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()).filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }

    /// Whether the request failed before reaching the application layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Decode(_))
    }

    /// Text for the dashboard's error banner after a failed initial load.
    pub fn load_message(&self) -> String {
        match self {
            ApiError::Status { .. } => "Failed to fetch logs".to_string(),
            other => other.to_string(),
        }
    }
}
