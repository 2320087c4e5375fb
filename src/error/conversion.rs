/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses so handlers can
 * return `Result<_, AppError>` directly.
 *
 * # Response Format
 *
 * Error responses share one JSON shape with the authentication gate:
 *
 * ```json
 * {
 *   "status": "error",
 *   "message": ["Error message"]
 * }
 * ```
 *
 * The message field is an array: validation errors may carry several
 * messages, and single-message errors keep the same shape.
 */

use axum::response::{IntoResponse, Json, Response};

use crate::error::types::AppError;

/// Build the crate's standard JSON error body
///
/// # Arguments
///
/// * `messages` - User-facing messages, one entry per problem
pub fn error_body(messages: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "status": "error",
        "message": messages,
    })
}

impl IntoResponse for AppError {
    /// Convert a backend error into an HTTP response
    ///
    /// Infrastructure errors (5xx) are logged here with their full detail;
    /// the client only sees the sanitized message from `AppError::message`.
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Internal error: {}", self);
        }

        let message = self.message();
        (status, Json(error_body(&[message.as_str()]))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_error_body_shape() {
        let body = error_body(&["No se ha enviado el token"]);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"][0], "No se ha enviado el token");
        assert!(body["message"].as_array().is_some());
    }

    #[tokio::test]
    async fn test_handler_error_response() {
        let error = AppError::handler(StatusCode::BAD_REQUEST, "Invalid email format");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"][0], "Invalid email format");
    }

    #[tokio::test]
    async fn test_internal_error_response_is_generic() {
        let error = AppError::state("registry wiring problem");
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"][0], "Internal server error");
    }
}
