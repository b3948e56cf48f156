mod common;

use std::collections::HashSet;

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{create, send, setup_test_app};

#[tokio::test]
async fn test_create_category() {
    let app = setup_test_app().await;

    let (status, body) = create(&app, "Books").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"success": true, "message": "created the category"}));

    let (status, body) = send(&app, Method::GET, "/category/Books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categoryName"], "Books");
    assert!(body["id"].is_i64());
}

#[tokio::test]
async fn test_create_duplicate_conflicts() {
    let app = setup_test_app().await;

    assert_eq!(create(&app, "Books").await.0, StatusCode::CREATED);

    let (status, body) = create(&app, "Books").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"success": false, "message": "category already exists"}));

    let (_, list) = send(&app, Method::GET, "/category/", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_categories() {
    let app = setup_test_app().await;

    let (status, body) = send(&app, Method::GET, "/category/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    for name in ["a", "b", "c"] {
        assert_eq!(create(&app, name).await.0, StatusCode::CREATED);
    }

    let (status, body) = send(&app, Method::GET, "/category/", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: HashSet<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["categoryName"].as_str().unwrap())
        .collect();
    assert_eq!(names, HashSet::from(["a", "b", "c"]));

    let (status, without_slash) = send(&app, Method::GET, "/category", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(without_slash, body);
}

#[tokio::test]
async fn test_create_rejects_invalid_body() {
    let app = setup_test_app().await;

    let (status, body) = create(&app, "   ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, body) = send(&app, Method::POST, "/category/create", Some("{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, body) = send(&app, Method::POST, "/category/create", Some("not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (_, list) = send(&app, Method::GET, "/category/", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_get_missing_category() {
    let app = setup_test_app().await;

    let (status, body) = send(&app, Method::GET, "/category/Nothing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "message": "category not found"}));
}

#[tokio::test]
async fn test_concurrent_create_same_name() {
    let app = setup_test_app().await;

    let (first, second) = tokio::join!(create(&app, "Sports"), create(&app, "Sports"));
    let mut statuses = vec![first.0.as_u16(), second.0.as_u16()];
    statuses.sort();
    assert_eq!(statuses, vec![201, 409]);

    let (_, list) = send(&app, Method::GET, "/category/", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_route() {
    let app = setup_test_app().await;

    let (status, _) = send(&app, Method::GET, "/recommendations", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::OPTIONS, "/anything", None).await;
    assert_eq!(status, StatusCode::OK);
}
