//! Error types for response validation and status rendering

use thiserror::Error;

/// Discriminant shared by every error the poll loop can observe
///
/// The loop decides how to react to a failure by its kind rather than by
/// the concrete error type it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required configuration is missing or invalid
    Config,
    /// Status API answered with something other than 200
    InvalidResponseCode,
    /// Status API could not be reached
    Connection,
    /// Status API body was not valid JSON
    Parse,
    /// Status API returned no homeworks
    EmptyResponse,
    /// A value had the wrong JSON type
    TypeMismatch,
    /// A value was of the right type but not recognized
    Value,
    /// A required field was absent
    Key,
}

/// Errors raised while validating a status response or rendering a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// Response body is not a JSON object
    #[error("API response is not a JSON object")]
    NotAnObject,

    /// The `homeworks` field is present but not an array
    #[error("field \"homeworks\" in API response is not a list")]
    NotAList,

    /// The `homeworks` field is missing, null or an empty array
    #[error("API response contains no homeworks")]
    EmptyResponse {
        /// Whether the `homeworks` key was present (as an empty array)
        key_present: bool,
    },

    /// A homework record is not a JSON object
    #[error("homework record is not a JSON object")]
    RecordNotAnObject,

    /// A homework record has no `homework_name`
    #[error("homework record has no \"homework_name\" field")]
    MissingName,

    /// The `status` field is missing or not one of the recognized values
    #[error("unexpected homework status: {0}")]
    UnknownStatus(String),
}

impl ResponseError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotAnObject | Self::NotAList | Self::RecordNotAnObject => ErrorKind::TypeMismatch,
            Self::EmptyResponse { .. } => ErrorKind::EmptyResponse,
            Self::MissingName => ErrorKind::Key,
            Self::UnknownStatus(_) => ErrorKind::Value,
        }
    }
}
