/**
 * Strict JSON Bodies
 *
 * `ValidJson<T>` wraps Axum's `Json` extractor and turns every rejection
 * into an `ApiError::Validation`, so a bad body is answered with the usual
 * `{msg, status}` JSON instead of Axum's plain-text rejection. Combined with
 * `#[serde(deny_unknown_fields)]` on the request types, anything that is not
 * exactly the expected shape is refused before a handler runs.
 */

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::ApiError;

/// JSON body extractor that fails closed
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    tracing::warn!("Rejected request body: {}", rejection.body_text());
    match rejection {
        JsonRejection::MissingJsonContentType(_) => ApiError::validation("Missing JSON in request"),
        JsonRejection::JsonSyntaxError(_) => ApiError::validation("Malformed JSON in request"),
        JsonRejection::JsonDataError(_) => {
            ApiError::validation("Request body does not match the expected fields")
        }
        _ => ApiError::validation("Invalid request body"),
    }
}

/// Unwrap a required field, treating an empty string as absent
pub fn required(value: Option<String>, field: &'static str) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::validation(format!("Missing {} parameter", field))),
    }
}
