use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use librarium_api::config::ServerConfig;
use librarium_api::router::build_app_router;
use librarium_api::state::AppState;
use librarium_db::catalog::Catalog;

/// Build the full application router over a fresh temp-dir catalog.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (request ID, timeout, tracing, panic
/// recovery) that production uses.
///
/// Returns the catalog handle for seeding documents directly, plus the
/// temp dir guard; the keyspace lives only as long as the guard does.
pub fn test_app() -> (Router, Catalog, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let catalog = Catalog::open(dir.path()).expect("Failed to open catalog keyspace");

    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        data_dir: dir.path().to_path_buf(),
        request_timeout_secs: 30,
    };

    let state = AppState {
        catalog: catalog.clone(),
    };

    (build_app_router(state, &config), catalog, dir)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Read the full response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read the `Location` header of a redirect response.
pub fn location(response: &Response) -> String {
    response
        .headers()
        .get("location")
        .expect("Response should carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}
