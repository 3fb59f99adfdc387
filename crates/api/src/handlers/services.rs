use axum::{
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use sysdwitch_domain::ServiceCommand;
use tracing::{debug, instrument, warn};

use crate::{dto::ApiResponse, errors::ApiError, state::AppState};

pub const INVALID_PATH_MESSAGE: &str =
    "Invalid path format. Expected /api/services/{name}/{action}";

const SERVICES_PREFIX: &str = "/api/services";

#[instrument(skip(state), name = "api_get_services_status")]
pub async fn get_services_status(State(state): State<AppState>) -> Json<ApiResponse> {
    let statuses = state.get_all_services_status.execute().await;
    debug!(count = statuses.len(), "Service statuses retrieved");
    Json(ApiResponse::services(&statuses))
}

#[instrument(skip(state), name = "api_control_service")]
pub async fn control_service(
    State(state): State<AppState>,
    method: Method,
    Path((name, action)): Path<(String, String)>,
) -> Response {
    let command = match action.parse::<ServiceCommand>() {
        Ok(command) => command,
        Err(e) => {
            warn!(action = %action, service = %name, "Invalid action requested");
            return ApiError::from(e).into_response();
        }
    };

    if method != Method::POST {
        warn!(
            method = %method,
            command = command.as_str(),
            service = %name,
            "Invalid method for service control"
        );
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(axum::http::header::ALLOW, "POST")],
            Json(ApiResponse::error("Method not allowed")),
        )
            .into_response();
    }

    let status = state.control_service.execute(&name, command).await;
    debug!(
        service = %status.name(),
        status = status.status(),
        "Service control response"
    );

    Json(ApiResponse::service(&status)).into_response()
}

/// Fallback for every `/api` path without a route. Anything under
/// `/api/services` is a malformed control path.
pub async fn api_fallback(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    let path = uri.path();
    if path == SERVICES_PREFIX || path.starts_with(&format!("{}/", SERVICES_PREFIX)) {
        warn!(method = %method, path = %path, "Invalid API path format");
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(INVALID_PATH_MESSAGE)),
        )
            .into_response();
    }

    debug!(method = %method, path = %path, "Unknown API path");
    (StatusCode::NOT_FOUND, Json(ApiResponse::error("Not found"))).into_response()
}
