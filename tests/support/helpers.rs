// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryNewsRepository};
use axum::body;
use axum::body::Body;
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

use kawaraban_core::application::ports::time::Clock;
use kawaraban_core::application::services::ApplicationServices;
use kawaraban_core::domain::news::{NewsReadRepository, NewsWriteRepository};
use kawaraban_core::presentation::http::{routes::build_router, state::HttpState};

pub struct TestContext {
    pub repo: Arc<InMemoryNewsRepository>,
    pub clock: Arc<FixedClock>,
    pub state: HttpState,
}

pub fn build_test_state() -> TestContext {
    let repo = Arc::new(InMemoryNewsRepository::default());
    let clock = Arc::new(FixedClock::default());

    let write_repo: Arc<dyn NewsWriteRepository> = repo.clone();
    let read_repo: Arc<dyn NewsReadRepository> = repo.clone();
    let clock_port: Arc<dyn Clock> = clock.clone();

    let services = Arc::new(ApplicationServices::new(write_repo, read_repo, clock_port));

    TestContext {
        repo,
        clock,
        state: HttpState { services },
    }
}

pub fn make_test_router() -> axum::Router {
    build_router(build_test_state().state)
}

pub fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Drive one request through the router and decode the JSON body.
pub async fn send(app: axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
