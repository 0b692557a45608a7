// Response decoding

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::*;

/// Decode a response body into `T`.
///
/// The service reports failures in the body rather than through the status
/// code: a top-level object with an `error` key becomes
/// [`Sc2RanksError::Remote`] and nothing else from that body is mapped.
pub fn decode<T: DeserializeOwned>(body: &str) -> Sc2RanksResult<T> {
    let value: Value = serde_json::from_str(body)?;
    if let Some(error) = remote_error(&value) {
        return Err(error);
    }
    Ok(serde_json::from_value(value)?)
}

fn remote_error(value: &Value) -> Option<Sc2RanksError> {
    let message = match value.as_object()?.get("error")? {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    };
    Some(Sc2RanksError::remote(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Character;

    #[test]
    fn error_key_wins_over_payload() {
        let result = decode::<Character>(r#"{"error": "no such character", "name": "x"}"#);
        match result {
            Err(Sc2RanksError::Remote { message }) => assert_eq!(message, "no such character"),
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[test]
    fn non_string_error_is_rendered_as_json() {
        let err = decode::<Character>(r#"{"error": {"code": 7}}"#).unwrap_err();
        assert_eq!(err.remote_message(), Some(r#"{"code":7}"#));
    }

    #[test]
    fn invalid_body_is_a_json_error() {
        let err = decode::<Character>("<html>502</html>").unwrap_err();
        assert!(matches!(err, Sc2RanksError::Json(_)));
    }
}
