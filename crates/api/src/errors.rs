use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sysdwitch_domain::DomainError;

use crate::dto::ApiResponse;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::InvalidAction(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            // Command failures carry host detail; they stay in the logs.
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (status, Json(ApiResponse::error(message))).into_response()
    }
}
