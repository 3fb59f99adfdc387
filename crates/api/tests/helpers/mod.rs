#![allow(dead_code)]

mod mock_runner;

pub use mock_runner::MockServiceRunner;

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use http_body_util::BodyExt;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use sysdwitch_api::{create_app, AppState};
use sysdwitch_application::services::AdminCredentials;
use sysdwitch_application::use_cases::{
    ControlServiceUseCase, GetAllServicesStatusUseCase, GetServiceStatusUseCase,
};
use sysdwitch_domain::Allowlist;
use tower::ServiceExt;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "s3cret:pass";

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../web/static")
}

pub fn test_state(runner: &MockServiceRunner, allowed: &[&str]) -> AppState {
    let allowlist = Arc::new(Allowlist::new(allowed).unwrap());
    let runner = Arc::new(runner.clone());
    let get_status = Arc::new(GetServiceStatusUseCase::new(allowlist, runner.clone()));

    AppState {
        get_all_services_status: Arc::new(GetAllServicesStatusUseCase::new(get_status.clone())),
        control_service: Arc::new(ControlServiceUseCase::new(runner, get_status)),
        credentials: Arc::new(AdminCredentials::new(ADMIN_USER, ADMIN_PASS)),
        rate_limiter: None,
        trust_proxy_headers: false,
        static_dir: static_dir(),
        request_timeout: Duration::from_secs(5),
    }
}

pub fn test_app(runner: &MockServiceRunner, allowed: &[&str]) -> Router {
    create_app(test_state(runner, allowed))
}

pub fn basic_auth(user: &str, pass: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, pass)))
}

pub fn authed(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, basic_auth(ADMIN_USER, ADMIN_PASS))
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
