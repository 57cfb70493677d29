//! Test utilities for integration tests
#![allow(dead_code)]

use std::env;
use std::fs;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{Router, body::Body};
use uuid::Uuid;

use restaurant_agent::api::AppState;
use restaurant_agent::api::app;
use restaurant_agent::core::AppConfig;

pub const TEST_INDEX_HTML: &str = "<!doctype html><title>Restaurant Calling Agent</title>";

/// Creates a test application router serving a throwaway web
/// directory.
pub fn test_app() -> Router {
    let app_state = AppState::new(test_config());
    app(Arc::new(RwLock::new(app_state)))
}

pub fn test_config() -> AppConfig {
    // Unique directory per call so tests can run in parallel
    let dir = env::temp_dir().join(format!("restaurant-agent-{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("Failed to create web directory");
    fs::write(dir.join("index.html"), TEST_INDEX_HTML).expect("Failed to write index.html");

    AppConfig {
        web_dir: dir.display().to_string(),
        api_base_url: String::from("http://localhost:2222"),
        listen_delay: Duration::from_millis(1),
    }
}

/// Serve the test app on an ephemeral port and return its base URL.
pub async fn spawn_test_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    let app = test_app();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}
