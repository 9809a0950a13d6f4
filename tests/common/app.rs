//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use personal_color::models::AppConfig;
use personal_color::server::{build_router, create_app_state, AppState};
use personal_color::services::AnalysisService;

use super::fixtures::PORTRAIT_SIZE;

/// Test application with router and direct access to services
pub struct TestApp {
    router: axum::Router,
    pub service: Arc<AnalysisService>,
    pub config: Arc<AppConfig>,
}

impl TestApp {
    /// Create a test app whose working width matches the fixture portraits,
    /// so uploads are analyzed without resampling.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.analysis.target_width = PORTRAIT_SIZE as u32;
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let state = create_app_state(config);
        let service = state.service.clone();
        let config = state.config.clone();

        let router = build_router(state);

        Self {
            router,
            service,
            config,
        }
    }

    /// Create app state for custom router configuration
    pub fn create_state() -> AppState {
        create_app_state(AppConfig::default())
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with a raw binary body
    pub async fn post_bytes(&self, path: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/octet-stream")
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
