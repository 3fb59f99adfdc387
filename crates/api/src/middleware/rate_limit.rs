use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use super::client_addr::client_key;
use crate::state::AppState;

pub async fn enforce_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(limiter) = state.rate_limiter.as_ref() else {
        return next.run(request).await;
    };

    let key = client_key(&request, state.trust_proxy_headers);
    if !limiter.allow(&key) {
        warn!(
            client = %key,
            method = %request.method(),
            path = %request.uri().path(),
            "Rate limit exceeded"
        );
        return (StatusCode::TOO_MANY_REQUESTS, "Rate limit exceeded").into_response();
    }

    next.run(request).await
}
