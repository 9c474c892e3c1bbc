use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;

use crate::errors::GatewayError;

/// Renders every gateway failure as the `{status_code, detail}` envelope.
/// Unanticipated errors are downgraded to a generic 500 here so internal
/// detail never reaches the caller.
impl IntoResponse for GatewayError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::BAD_GATEWAY);

        let detail = match &self {
            GatewayError::Internal(inner)
            | GatewayError::Config(inner) => {
                error!(detail = %inner, "Unexpected error");
                "Internal server error processing AI request".to_string()
            }
            GatewayError::Io(inner) => {
                error!(detail = %inner, "Unexpected error");
                "Internal server error processing AI request".to_string()
            }
            other => other.to_string(),
        };

        (
            status,
            Json(json!({"status_code": status.as_u16(), "detail": detail})),
        )
            .into_response()
    }
}
