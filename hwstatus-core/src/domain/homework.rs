//! Homework domain types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ResponseError;

/// Field holding the homework name in a status record
pub const NAME_FIELD: &str = "homework_name";

/// Field holding the review status in a status record
pub const STATUS_FIELD: &str = "status";

/// Review status of a homework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Human-readable verdict sent to the chat for this status
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "The work has been reviewed: the reviewer liked everything. Hooray!",
            Self::Reviewing => "The work has been taken for review.",
            Self::Rejected => "The work has been reviewed: the reviewer has comments.",
        }
    }

    /// Parse a status from the raw JSON value of a record
    pub fn from_value(value: Option<&Value>) -> Result<Self, ResponseError> {
        let value = value.unwrap_or(&Value::Null);
        serde_json::from_value(value.clone())
            .map_err(|_| ResponseError::UnknownStatus(value.to_string()))
    }
}

/// Extract the homework name from a status record
///
/// Non-string names are rendered as their JSON text.
pub fn homework_name(record: &Value) -> Result<String, ResponseError> {
    let record = record.as_object().ok_or(ResponseError::RecordNotAnObject)?;
    match record.get(NAME_FIELD) {
        None | Some(Value::Null) => Err(ResponseError::MissingName),
        Some(Value::String(name)) => Ok(name.clone()),
        Some(other) => Ok(other.to_string()),
    }
}

/// Render the chat message for a status record
///
/// This is a pure function of the record: it knows nothing about what was
/// sent before. Duplicate suppression happens in the poll loop.
pub fn render(record: &Value) -> Result<String, ResponseError> {
    let name = homework_name(record)?;
    let status = HomeworkStatus::from_value(record.get(STATUS_FIELD))?;

    Ok(format!(
        "Status of homework \"{}\" has changed. {}",
        name,
        status.verdict()
    ))
}
