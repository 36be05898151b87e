use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used when a failed fetch carries no usable description.
pub const FETCH_ERROR_FALLBACK: &str = "Error while fetching data";

/// Error payload TMDB attaches to non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub status_code: i64,
    pub status_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

impl ApiError {
    pub fn new(status_code: i64, status_message: impl Into<String>) -> Self {
        Self {
            status_code,
            status_message: status_message.into(),
            success: Some(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced a usable response (connectivity, decode).
    #[error("{}", .message.as_deref().unwrap_or(FETCH_ERROR_FALLBACK))]
    Client { message: Option<String> },
}

impl TransportError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: Some(message.into()),
        }
    }

    /// The human-readable description, if the failure carried one.
    pub fn message(&self) -> Option<&str> {
        let message = match self {
            Self::Status { message, .. } => message.as_str(),
            Self::Client { message } => message.as_deref()?,
        };
        (!message.trim().is_empty()).then_some(message)
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Client { .. } => None,
        }
    }
}
