#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use tripgenie_api::config::ServerConfig;
use tripgenie_api::engine::generation::CandidateSource;
use tripgenie_api::router::build_app_router;
use tripgenie_api::state::AppState;
use tripgenie_core::generation::GenerationParams;
use tripgenie_gemini::{GeminiConfig, UpstreamError};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        gemini: GeminiConfig::default(),
    }
}

/// Canned upstream behaviour for [`FakeGenerator`].
#[derive(Debug, Clone)]
pub enum Script {
    Candidates(Vec<Value>),
    CallFailed(Option<u16>),
    NotConfigured,
}

/// Stand-in for the upstream model that records how often it was called.
pub struct FakeGenerator {
    script: Script,
    pub calls: AtomicUsize,
}

impl FakeGenerator {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CandidateSource for FakeGenerator {
    async fn generate(&self, _params: &GenerationParams) -> Result<Vec<Value>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Candidates(items) => Ok(items.clone()),
            Script::CallFailed(status) => Err(UpstreamError::UpstreamCallFailed { status: *status }),
            Script::NotConfigured => Err(UpstreamError::Configuration),
        }
    }
}

/// Build the full application router with an upstream that returns no
/// suggestions.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, FakeGenerator::new(Script::Candidates(Vec::new())))
}

/// Build the full application router around the given upstream fake.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app_with(pool: PgPool, generator: Arc<FakeGenerator>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        generator,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, json_request("POST", uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, json_request("PUT", uri, body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a trip through the API and return its id.
pub async fn create_trip(pool: &PgPool, body: Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/api/v1/trips", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
