// gateway/src/envelope.rs
//
// The backend wraps every payload in `{ success: bool, ... }`. Lists carry
// the collection under a per-resource plural key, mutations carry an
// optional `message` plus an optional field-keyed `errors` map. Decoding
// goes through serde_json::Value first so the variable keys stay data, not
// types.

use serde::de::DeserializeOwned;
use serde_json::Value;

use models::FieldErrors;

use crate::errors::{GatewayError, GatewayResult};

/// Checks the `success` flag and converts a `false` payload into the
/// matching error: `errors` map -> `Validation`, otherwise `Rejected`.
pub fn check_success(value: &Value) -> GatewayResult<()> {
    match value.get("success").and_then(Value::as_bool) {
        Some(true) => Ok(()),
        Some(false) => {
            if let Some(errors) = value.get("errors").and_then(Value::as_object) {
                let map: FieldErrors = errors
                    .iter()
                    .map(|(field, msg)| {
                        let msg = msg.as_str().map(str::to_string).unwrap_or_else(|| msg.to_string());
                        (field.clone(), msg)
                    })
                    .collect();
                Err(GatewayError::Validation(map))
            } else {
                let message = value
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("request rejected")
                    .to_string();
                Err(GatewayError::Rejected(message))
            }
        }
        None => Err(GatewayError::Decode("missing success flag".to_string())),
    }
}

/// Pulls the typed collection out of a list envelope.
pub fn collection<T: DeserializeOwned>(value: &Value, key: &str) -> GatewayResult<Vec<T>> {
    let raw = value
        .get(key)
        .ok_or_else(|| GatewayError::Decode(format!("missing collection key '{key}'")))?;
    serde_json::from_value(raw.clone()).map_err(|e| GatewayError::Decode(e.to_string()))
}

/// Pulls the saved entity out of a mutation envelope, if the backend
/// echoed one back.
pub fn entity<T: DeserializeOwned>(value: &Value, key: &str) -> Option<T> {
    value
        .get(key)
        .and_then(|raw| serde_json::from_value(raw.clone()).ok())
}

pub fn message(value: &Value) -> Option<String> {
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_false_with_errors_is_validation() {
        let payload = json!({ "success": false, "errors": { "name": "required" } });
        match check_success(&payload) {
            Err(GatewayError::Validation(errors)) => {
                assert_eq!(errors.get("name").map(String::as_str), Some("required"));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn success_false_with_message_only_is_rejected() {
        let payload = json!({ "success": false, "message": "room is occupied" });
        assert_eq!(
            check_success(&payload),
            Err(GatewayError::Rejected("room is occupied".to_string()))
        );
    }

    #[test]
    fn missing_flag_is_a_decode_error() {
        let payload = json!({ "appointments": [] });
        assert!(matches!(
            check_success(&payload),
            Err(GatewayError::Decode(_))
        ));
    }

    #[test]
    fn collection_key_mismatch_is_a_decode_error() {
        let payload = json!({ "success": true, "patients": [] });
        let result: GatewayResult<Vec<serde_json::Value>> = collection(&payload, "appointments");
        assert!(matches!(result, Err(GatewayError::Decode(_))));
    }
}
