use crate::app::catalog_service::{CatalogError, CatalogService};
use crate::domain::product::FieldViolation;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
}

/// Error body returned for every non-2xx outcome.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Per-field messages; present on validation failures only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<FieldViolation>>,
}

/// Turns a [`CatalogError`] into an HTTP response at the transport boundary,
/// keeping status codes out of the service layer.
pub struct ApiError(CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            CatalogError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "validation failed".to_string(),
                    violations: Some(violations),
                },
            ),
            CatalogError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "product not found".to_string(),
                    violations: None,
                },
            ),
            CatalogError::Storage(err) => {
                tracing::error!(error = %err, "storage failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        // Diagnostic only; callers must not parse this.
                        error: format!("internal server error: {err}"),
                        violations: None,
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Maps a malformed JSON body to the same 400 shape as a field-validation
/// failure. Bad bodies never reach the service layer.
pub fn bad_request_body(err: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: format!("invalid JSON body: {err}"),
            violations: None,
        }),
    )
        .into_response()
}
