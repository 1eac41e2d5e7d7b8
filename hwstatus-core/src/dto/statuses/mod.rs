//! Status API response

use serde_json::Value;

use crate::error::ResponseError;

/// Field holding the list of homework records
pub const HOMEWORKS_FIELD: &str = "homeworks";

/// Field holding the server time, used as the next poll window bound
pub const CURRENT_DATE_FIELD: &str = "current_date";

/// Check the shape of a status response and return its homework records
///
/// A missing (or null) `homeworks` key and an empty array both produce
/// [`ResponseError::EmptyResponse`]; `key_present` tells them apart.
/// The records themselves are returned unchecked.
pub fn validate(body: &Value) -> Result<&[Value], ResponseError> {
    let body = body.as_object().ok_or(ResponseError::NotAnObject)?;

    match body.get(HOMEWORKS_FIELD) {
        None | Some(Value::Null) => Err(ResponseError::EmptyResponse { key_present: false }),
        Some(Value::Array(homeworks)) if homeworks.is_empty() => {
            Err(ResponseError::EmptyResponse { key_present: true })
        }
        Some(Value::Array(homeworks)) => Ok(homeworks.as_slice()),
        Some(_) => Err(ResponseError::NotAList),
    }
}

/// Server-reported current time, if the response carries one
pub fn current_date(body: &Value) -> Option<i64> {
    body.get(CURRENT_DATE_FIELD).and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_returns_records_unchanged() {
        let body = json!({"homeworks": [{"homework_name": "A"}, {"anything": 1}]});
        let homeworks = validate(&body).unwrap();

        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[1], json!({"anything": 1}));
    }

    #[test]
    fn test_validate_not_an_object() {
        assert_eq!(validate(&json!([1, 2])), Err(ResponseError::NotAnObject));
        assert_eq!(validate(&json!("text")), Err(ResponseError::NotAnObject));
    }

    #[test]
    fn test_validate_missing_key() {
        assert_eq!(
            validate(&json!({"current_date": 5})),
            Err(ResponseError::EmptyResponse { key_present: false })
        );
        assert_eq!(
            validate(&json!({"homeworks": null})),
            Err(ResponseError::EmptyResponse { key_present: false })
        );
    }

    #[test]
    fn test_validate_empty_list() {
        assert_eq!(
            validate(&json!({"homeworks": []})),
            Err(ResponseError::EmptyResponse { key_present: true })
        );
    }

    #[test]
    fn test_validate_not_a_list() {
        assert_eq!(
            validate(&json!({"homeworks": {"homework_name": "A"}})),
            Err(ResponseError::NotAList)
        );
    }

    #[test]
    fn test_current_date() {
        assert_eq!(current_date(&json!({"current_date": 1700000000})), Some(1700000000));
        assert_eq!(current_date(&json!({"current_date": "soon"})), None);
        assert_eq!(current_date(&json!({})), None);
    }
}
