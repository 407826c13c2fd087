//! Shared helpers for driving the router

use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use mission_server::{server::create_router, AppState, ServiceConfig};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body should be UTF-8")
    }

    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .unwrap_or_else(|| panic!("missing header {}", name))
            .to_str()
            .unwrap()
    }
}

pub fn app() -> Router {
    app_with(ServiceConfig::default())
}

pub fn app_with(config: ServiceConfig) -> Router {
    create_router(Arc::new(AppState::new(&config).unwrap()))
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> TestResponse {
    post_raw(app, uri, body.to_string()).await
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

/// Home (10, 20), heading 0, one leg 1000 m due east at 50 m and 5 m/s
pub fn single_leg_request() -> Value {
    serde_json::json!({
        "init_lat": 10.0,
        "init_lon": 20.0,
        "init_bearing": 0.0,
        "waypoints": [
            { "horizontal": 1000, "vertical": 50, "bearing": 90, "hold_time": 0, "speed": 5 }
        ]
    })
}
