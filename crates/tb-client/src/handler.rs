//! The single response pipeline every registry operation goes through.
//!
//! transport outcome -> status check -> body decode -> validate -> map.
//! Nothing is retried; every failure surfaces as a [`ClientError`].

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, ErrorResponse};
use crate::validate::{Violation, whole_number};

/// Turn an in-flight request outcome into a validated domain value.
///
/// `validate` runs on the decoded JSON body; `map` only sees bodies with zero
/// violations.
pub(crate) async fn handle<T, V, M>(
    sent: Result<reqwest::Response, reqwest::Error>,
    validate: V,
    map: M,
) -> Result<T, ClientError>
where
    V: FnOnce(&Value) -> Vec<Violation>,
    M: FnOnce(Value) -> Result<T, ClientError>,
{
    let response = sent.inspect_err(|e| tracing::debug!(%e, "no response from registry"))?;
    let status = response.status();
    let url = response.url().clone();
    let body = response.text().await?;

    if !status.is_success() {
        let error = server_error(status, &body);
        tracing::debug!(
            %url,
            status = status.as_u16(),
            error_code = error.error_code,
            "registry returned an error"
        );
        return Err(ClientError::Server(error));
    }

    let Some(value) = decode_body(&body) else {
        tracing::debug!(%url, "registry returned an empty body");
        return Err(ClientError::EmptyResponse);
    };

    let violations = validate(&value);
    if !violations.is_empty() {
        tracing::debug!(%url, count = violations.len(), "registry response failed validation");
        return Err(ClientError::Validation(violations));
    }

    map(value)
}

/// Decode a success body. `None` for an absent body.
///
/// Bodies that are not JSON (plain-text property values) become strings.
fn decode_body(body: &str) -> Option<Value> {
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(body.to_string())),
    }
}

/// Build the domain error for a non-success status.
///
/// Falls back to the HTTP status and raw body when the registry did not send
/// its `{error_code, message}` payload.
fn server_error(status: StatusCode, body: &str) -> ErrorResponse {
    serde_json::from_str(body).unwrap_or_else(|_| ErrorResponse {
        error_code: i64::from(status.as_u16()),
        message: if body.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            body.to_string()
        },
    })
}

/// Mapper for typed payloads whose shape was already validated.
pub(crate) fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value)
        .map_err(|e| ClientError::Validation(vec![Violation::new("$", e.to_string())]))
}

/// Mapper for bare integer payloads (affected-row counts, subject ids).
pub(crate) fn to_int(value: Value) -> Result<i64, ClientError> {
    value.as_number().and_then(whole_number).ok_or_else(|| {
        ClientError::Validation(vec![Violation::new("$", format!("expected an integer, got {value}"))])
    })
}
