//! Error translation.
//!
//! Every handler returns `Result<_, ApiError>`; this is the single place
//! where internal failures become HTTP status codes and `{"error": ...}`
//! JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The path id is not syntactically valid for the store.
    #[error("malformatted id")]
    MalformedId,

    /// Client-fixable input problem; the message is the response body.
    #[error("{0}")]
    Validation(String),

    /// The addressed resource does not exist. Answered with an empty body.
    #[error("not found")]
    NotFound,

    /// Anything the store failed at that has no client-facing contract.
    #[error("store failure: {0}")]
    Internal(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedId => ApiError::MalformedId,
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MalformedId => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "malformatted id" })),
            )
                .into_response(),
            ApiError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Unhandled store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_id_maps_to_bad_request() {
        let response = ApiError::MalformedId.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_malformed_id_converts_to_the_dedicated_variant() {
        let err: ApiError = StoreError::MalformedId.into();
        assert!(matches!(err, ApiError::MalformedId));
    }

    #[test]
    fn not_found_has_empty_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
