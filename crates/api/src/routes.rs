use crate::handlers;
use crate::middleware::{
    apply_security_headers, enforce_rate_limit, recover_panics, require_basic_auth,
};
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, StatusCode},
    middleware::{from_fn, from_fn_with_state},
    routing::{any, get},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir, set_header::SetResponseHeaderLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};

const STATIC_CACHE_CONTROL: &str = "public, max-age=86400, immutable";

pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/services/status", get(handlers::get_services_status))
        .route("/services/{name}/{action}", any(handlers::control_service))
        .fallback(handlers::api_fallback)
}

/// Full application router. Layers run outermost first: security headers,
/// panic recovery, tracing, request timeout, rate limiting, basic auth.
pub fn create_app(state: AppState) -> Router {
    let static_files = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(STATIC_CACHE_CONTROL),
        ))
        .service(ServeDir::new(&state.static_dir));

    Router::new()
        .route("/", get(handlers::dashboard))
        .nest("/api", create_api_routes())
        .nest_service("/static", static_files)
        .layer(from_fn_with_state(state.clone(), require_basic_auth))
        .layer(from_fn_with_state(state.clone(), enforce_rate_limit))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(recover_panics))
        .layer(from_fn(apply_security_headers))
        .with_state(state)
}
