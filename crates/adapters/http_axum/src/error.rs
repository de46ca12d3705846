//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use pizzeria_domain::error::PizzeriaError;

/// Body for lookups that matched nothing, and for unclassified failures.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Body for rejected writes.
#[derive(Serialize)]
struct ErrorsBody {
    errors: Vec<String>,
}

/// Maps [`PizzeriaError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(PizzeriaError);

impl From<PizzeriaError> for ApiError {
    fn from(err: PizzeriaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            PizzeriaError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorsBody {
                    errors: vec![err.to_string()],
                }),
            )
                .into_response(),
            PizzeriaError::Integrity(err) => {
                tracing::debug!(
                    restaurant_id = %err.restaurant_id,
                    pizza_id = %err.pizza_id,
                    "rejected dangling reference"
                );
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorsBody {
                        errors: vec![err.to_string()],
                    }),
                )
                    .into_response()
            }
            PizzeriaError::NotFound(err) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            PizzeriaError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
