use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use catrec_rs::config::{Config, SqliteConfig};
use serde_json::Value;
use tower::ServiceExt;

pub async fn setup_test_app() -> Router {
    let mut config = Config::default();
    config.database.sqlite = Some(SqliteConfig {
        filename: "sqlite::memory:".to_string(),
    });

    let state = catrec_rs::build_state(config)
        .await
        .expect("Failed to build test state");
    catrec_rs::server::build_router(state)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

pub async fn create(app: &Router, name: &str) -> (StatusCode, Value) {
    let body = serde_json::json!({ "categoryName": name }).to_string();
    send(app, Method::POST, "/category/create", Some(&body)).await
}
