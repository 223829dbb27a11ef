//! HTTP tests that drive the full router with in-memory requests.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{
    config::TwilioConfig, router::router, state::AppState, util::upload::UploadStore,
};

mod waitlist;

const JWT_KEY: &str = "test-secret";

/// Router wired to a fresh in-memory database holding every table.
///
/// The context is kept alongside the router so the database outlives the requests.
struct TestApp {
    test: TestContext,
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.clone().unwrap();
        let uploads = UploadStore::new(std::env::temp_dir(), "http://localhost:3000");

        let router = router(uploads.dir()).with_state(AppState::new(
            db,
            reqwest::Client::new(),
            JWT_KEY.to_string(),
            TwilioConfig {
                account_sid: "AC123".to_string(),
                auth_token: "token".to_string(),
                verify_service_sid: "VA456".to_string(),
                // Discard port; nothing listens there.
                base_url: "http://127.0.0.1:9".to_string(),
            },
            uploads,
        ));

        Self { test, router }
    }

    fn db(&self) -> &sea_orm::DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    async fn request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, body)
    }

    async fn send(&self, method: Method, uri: &str) -> (StatusCode, Value) {
        self.request(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn send_json(&self, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}

/// Tests the root greeting and the OpenAPI document route.
///
/// Expected: 200 "Hello" and a JSON document listing the waitlist path
#[tokio::test]
async fn serves_greeting_and_openapi() {
    let app = TestApp::new().await;

    let (status, body) = app.send(Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("Hello".to_string()));

    let (status, body) = app.send(Method::GET, "/api/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/waitlist"].is_object());
}
