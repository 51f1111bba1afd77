/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, so handlers can return the error directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Invalid credentials",
 *   "status": 403
 * }
 * ```
 *
 * Internal faults (5xx) are logged here with their full detail; the response
 * body only carries the generic public message.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("internal fault: {self}");
        }

        let body = Json(serde_json::json!({
            "error": self.public_message(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
