use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// One failed check on one input field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub message: String,
    pub field: String,
}

/// Accumulates field-level validation failures.
///
/// Mutating handlers run their checks first and short-circuit with a 400
/// carrying every failure, so a client sees all problems at once.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: &str) {
        self.0.push(FieldError {
            message: message.to_string(),
            field: field.to_string(),
        });
    }

    /// Fail the field when the value is empty or whitespace.
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.push(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ok when every check passed, otherwise the collected failures.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl IntoResponse for FieldErrors {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"errors": self})),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_flags_empty_and_whitespace() {
        let mut checks = FieldErrors::new();
        checks.require("name", "", "Name is required");
        checks.require("status", "   ", "Status is required");
        checks.require("email", "a@x.com", "unused");

        let failed = checks.into_result().unwrap_err();
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json[0]["field"], "name");
        assert_eq!(json[1]["field"], "status");
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[test]
    fn empty_checks_pass() {
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
