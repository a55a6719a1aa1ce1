use crate::utils::error::RelayError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use std::any::Any;

fn detail_body(err: &RelayError) -> Value {
    match err {
        RelayError::ValidationError { issues } => json!({
            "detail": issues
                .iter()
                .map(|issue| json!({
                    "type": issue.kind,
                    "loc": ["body", issue.field],
                    "msg": issue.message,
                }))
                .collect::<Vec<_>>()
        }),
        other => json!({ "detail": other.to_string() }),
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(detail_body(&self))).into_response()
    }
}

/// Renders a handler panic as the unexpected-error body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("❌ Unexpected Error: handler panicked: {}", detail);
    RelayError::UnexpectedError { detail }.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FieldIssue;

    #[test]
    fn test_validation_detail_shape() {
        let body = detail_body(&RelayError::ValidationError {
            issues: vec![FieldIssue::missing("refactor_request")],
        });
        assert_eq!(
            body,
            json!({"detail": [{"type": "missing", "loc": ["body", "refactor_request"], "msg": "Field required"}]})
        );
    }

    #[test]
    fn test_panic_payload_becomes_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
