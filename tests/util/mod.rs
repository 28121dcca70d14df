//! Helpers for driving the router and inspecting HTTP responses in integration tests

use axum::{body::Body, http::Request, response::Response};
use holonet::server::{model::app::AppState, router::routes};
use holonet_test_utils::TestContext;
use tower::ServiceExt;

/// Reads the response body as JSON
pub async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}

/// Sends a request through the full application router
pub async fn send(test: &TestContext, request: Request<Body>) -> Response {
    routes(test.to_app_state::<AppState>())
        .oneshot(request)
        .await
        .expect("Router is infallible")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
