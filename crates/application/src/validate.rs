//! Generic response validation and record decoding.
//!
//! Validation asserts the shape every endpoint shares before any
//! schema-specific decoding runs; both steps are pure functions with no
//! shared state, safe to call from any worker.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use kindred_domain::{ApiError, ApiResult};

/// Asserts the generically expected response shape and borrows the first
/// record.
///
/// The payload must be a JSON array (the batch output shape), it must be
/// non-empty, and its first element must be an object. The first element
/// is returned verbatim, so validating the same payload twice yields the
/// identical record.
///
/// # Errors
///
/// `InvalidResponseType` when the payload is not an array or its first
/// element is not an object; `EmptyResponse` when the array has no
/// elements.
pub fn validate_response(payload: &Value) -> ApiResult<&Map<String, Value>> {
    let Some(items) = payload.as_array() else {
        return Err(ApiError::invalid_response_type(
            format!("expected a JSON array, got {}", json_type_name(payload)),
            format!("validate_response, given_data = {payload}"),
        ));
    };
    let Some(first) = items.first() else {
        return Err(ApiError::empty_response(
            "response is empty",
            format!("validate_response, given_data = {payload}"),
        ));
    };
    first.as_object().ok_or_else(|| {
        ApiError::invalid_response_type(
            format!(
                "expected an object as the first element, got {}",
                json_type_name(first)
            ),
            format!("validate_response, given_data = {first}"),
        )
    })
}

/// Decodes a validated record into a typed value.
///
/// Decoding stops at the first offending field, so the returned error
/// reports exactly one schema violation.
///
/// # Errors
///
/// `Validation` kind carrying serde's description of the first field
/// that failed.
pub fn decode_record<T: DeserializeOwned>(record: &Map<String, Value>) -> ApiResult<T> {
    serde_json::from_value(Value::Object(record.clone())).map_err(|error| {
        ApiError::validation(
            error.to_string(),
            format!("decode_record, given_data = {}", Value::Object(record.clone())),
        )
    })
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use kindred_domain::ApiErrorKind;

    #[test]
    fn test_non_array_payload_is_an_invalid_type() {
        for payload in [json!({"response": []}), json!(3), json!("ok"), json!(null)] {
            let error = validate_response(&payload).expect_err("not an array");
            assert_eq!(error.kind, ApiErrorKind::InvalidResponseType);
        }
    }

    #[test]
    fn test_empty_array_is_empty_response_not_invalid_type() {
        let error = validate_response(&json!([])).expect_err("empty");
        assert_eq!(error.kind, ApiErrorKind::EmptyResponse);
    }

    #[test]
    fn test_non_object_first_element_is_an_invalid_type() {
        let error = validate_response(&json!([1, 2])).expect_err("scalar element");
        assert_eq!(error.kind, ApiErrorKind::InvalidResponseType);
        assert!(error.message.contains("number"));
    }

    #[test]
    fn test_valid_payload_yields_first_record_verbatim() {
        let payload = json!([{"response": {"items": []}}, {"ignored": true}]);
        let record = validate_response(&payload).expect("valid");
        assert_eq!(Value::Object(record.clone()), payload[0]);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let payload = json!([{"response": {"items": [1]}}]);
        let first = validate_response(&payload).expect("valid").clone();
        let second = validate_response(&payload).expect("valid").clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_decode_reports_the_first_offending_field() {
        #[derive(Debug, serde::Deserialize)]
        struct Strict {
            #[allow(dead_code)]
            count: i64,
        }
        let payload = json!([{"count": "three"}]);
        let record = validate_response(&payload).expect("valid shape");
        let error = decode_record::<Strict>(record).expect_err("type mismatch");
        assert_eq!(error.kind, ApiErrorKind::Validation);
        assert!(error.message.contains("count") || error.message.contains("string"));
    }
}
