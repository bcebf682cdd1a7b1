/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "msg": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;
use crate::shared::ErrorBody;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody::new(self.message(), status.as_u16());
        (status, Json(body)).into_response()
    }
}
