use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, derive_more::Error, derive_more::Display)]
pub(crate) enum CatError {
    #[display("No cat with id {id}")]
    CatNotFound { id: u32 },
}

/// API error response returned for all error cases
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    pub message: String,
}

impl IntoResponse for CatError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            Self::CatNotFound { .. } => StatusCode::NOT_FOUND,
        };
        let message = self.to_string();

        (status, Json(ApiErrorResponse { message })).into_response()
    }
}
