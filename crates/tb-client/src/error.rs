//! Client error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validate::Violation;

/// Error payload the registry sends with a non-success status.
///
/// Carries the server's numeric code and message verbatim, e.g.
/// `{"error_code": 40401, "message": "Subject not found"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("registry error {error_code}: {message}")]
pub struct ErrorResponse {
    /// Registry-specific error code.
    pub error_code: i64,
    /// Human readable message from the registry.
    pub message: String,
}

/// Malformed version text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionFormatError {
    #[error("invalid format as semantic version: `{0}` (expected vMAJOR.MINOR.PATCH)")]
    Semantic(String),

    #[error("invalid format as major version: `{0}` (expected vMAJOR)")]
    Major(String),

    #[error("invalid version `{0}` (expected latest, vMAJOR or vMAJOR.MINOR.PATCH)")]
    Selector(String),
}

/// A string did not name a known variant of a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct UnknownValueError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Errors that can occur when talking to a typebook registry.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connectivity, timeout, body read).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The registry answered with an error status.
    #[error(transparent)]
    Server(#[from] ErrorResponse),

    /// Success status without a body.
    #[error("empty response")]
    EmptyResponse,

    /// The body was present but structurally wrong.
    #[error("invalid response: {}", join_violations(.0))]
    Validation(Vec<Violation>),

    /// Version text supplied by the caller could not be parsed.
    #[error(transparent)]
    Format(#[from] VersionFormatError),
}

impl ClientError {
    /// Registry error code, when the server reported one.
    #[must_use]
    pub const fn error_code(&self) -> Option<i64> {
        match self {
            Self::Server(response) => Some(response.error_code),
            _ => None,
        }
    }

    /// All structural violations, when the response failed validation.
    #[must_use]
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            Self::Validation(violations) => Some(violations),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_deserializes_from_wire_shape() {
        let parsed: ErrorResponse =
            serde_json::from_str(r#"{"error_code": 40401, "message": "Subject not found"}"#)
                .unwrap();
        assert_eq!(parsed.error_code, 40401);
        assert_eq!(parsed.message, "Subject not found");
    }

    #[test]
    fn server_error_exposes_code() {
        let err = ClientError::from(ErrorResponse {
            error_code: 40401,
            message: "Subject not found".into(),
        });
        assert_eq!(err.error_code(), Some(40401));
        assert_eq!(err.to_string(), "registry error 40401: Subject not found");
        assert!(err.violations().is_none());
    }

    #[test]
    fn validation_error_lists_every_violation() {
        let err = ClientError::Validation(vec![
            Violation::new("$.name", "missing required field"),
            Violation::new("$.description", "expected a string, got a number `1`"),
        ]);
        let message = err.to_string();
        assert!(message.contains("$.name: missing required field"));
        assert!(message.contains("$.description"));
        assert_eq!(err.violations().map(<[Violation]>::len), Some(2));
        assert_eq!(err.error_code(), None);
    }
}
