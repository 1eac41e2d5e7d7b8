//! Error types for the status and Telegram clients

use hwstatus_core::ErrorKind;
use thiserror::Error;

/// Result type alias for status API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when polling the status API
#[derive(Debug, Error)]
pub enum ApiError {
    /// API answered with a status other than 200
    #[error("status API returned {code} {reason}: {body}")]
    InvalidResponseCode {
        /// HTTP status code
        code: u16,
        /// Canonical reason phrase for the code
        reason: String,
        /// Raw response body
        body: String,
    },

    /// Request never produced a response (connect, DNS, timeout)
    #[error("failed to reach status API: {0}")]
    Connection(#[from] reqwest::Error),

    /// Response body is not valid JSON
    #[error("failed to parse status API response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Create an invalid-response-code error
    pub fn invalid_response_code(
        code: u16,
        reason: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::InvalidResponseCode {
            code,
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidResponseCode { .. } => ErrorKind::InvalidResponseCode,
            Self::Connection(_) => ErrorKind::Connection,
            Self::Parse(_) => ErrorKind::Parse,
        }
    }
}

/// Errors that can occur when sending a Telegram message
#[derive(Debug, Error)]
pub enum TelegramError {
    /// HTTP request failed
    #[error("Telegram request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Bot API rejected the message
    #[error("Telegram API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error description returned by the Bot API
        message: String,
    },
}
