use serde_json::Value;

use crate::error::Error;

/// Validate a status API response against the documented shape and return
/// the homework list.
///
/// The checks run in order and each failure is its own [`Error`] kind: the
/// response must be a JSON object, it must contain the `homeworks` key, and
/// that key must hold a list. Records inside the list are left untouched;
/// field-level validation happens when a verdict is derived.
pub fn check_response(response: &Value) -> Result<&[Value], Error> {
    let fields = response.as_object().ok_or(Error::NotAnObject)?;
    let homeworks = fields.get("homeworks").ok_or(Error::HomeworksMissing)?;
    let list = homeworks.as_array().ok_or(Error::HomeworksNotAList)?;
    Ok(list.as_slice())
}

/// Extract the server's own clock from a response, if it reported one.
///
/// The watcher advances its poll cursor to this value after a successful
/// poll so the next request only asks for newer records.
pub fn server_timestamp(response: &Value) -> Option<u64> {
    response.get("timestamp").and_then(Value::as_u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn accepts_documented_shape() {
        let response = json!({
            "homeworks": [{"homework_name": "proj1", "status": "approved"}],
            "timestamp": 1_549_962_000,
        });
        let list = check_response(&response).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["homework_name"], "proj1");
    }

    #[test]
    fn rejects_non_object_response() {
        let err = check_response(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, Error::NotAnObject));

        let err = check_response(&json!("homeworks")).unwrap_err();
        assert!(matches!(err, Error::NotAnObject));
    }

    #[test]
    fn rejects_missing_homeworks_key() {
        let err = check_response(&json!({"timestamp": 1_549_962_000})).unwrap_err();
        assert!(matches!(err, Error::HomeworksMissing));
        assert_eq!(err.code(), "homeworks-missing");
    }

    #[test]
    fn rejects_homeworks_that_is_not_a_list() {
        let err = check_response(&json!({"homeworks": "proj1"})).unwrap_err();
        assert!(matches!(err, Error::HomeworksNotAList));
    }

    #[test]
    fn empty_homework_list_is_valid() {
        let list = check_response(&json!({"homeworks": [], "timestamp": 0})).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn reads_server_timestamp_when_present() {
        assert_eq!(server_timestamp(&json!({"timestamp": 42})), Some(42));
        assert_eq!(server_timestamp(&json!({"homeworks": []})), None);
        assert_eq!(server_timestamp(&json!({"timestamp": "42"})), None);
    }
}
