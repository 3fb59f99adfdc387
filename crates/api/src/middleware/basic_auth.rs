use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::warn;

use super::client_addr::remote_addr;
use crate::state::AppState;

pub const AUTH_REALM: &str = r#"Basic realm="Service Control Panel""#;

pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authenticated = extract_credentials(&request)
        .map(|(user, pass)| state.credentials.verify(&user, &pass))
        .unwrap_or(false);

    if !authenticated {
        warn!(
            method = %request.method(),
            path = %request.uri().path(),
            remote_addr = %remote_addr(&request),
            "Authentication failed"
        );
        return unauthorized();
    }

    next.run(request).await
}

fn extract_credentials(request: &Request) -> Option<(String, String)> {
    let value = request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    decode_basic(value)
}

/// Decodes `Basic base64(user:pass)`. The password may itself contain ':'.
pub fn decode_basic(value: &str) -> Option<(String, String)> {
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, pass) = decoded.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, AUTH_REALM)],
        "Unauthorized",
    )
        .into_response()
}
