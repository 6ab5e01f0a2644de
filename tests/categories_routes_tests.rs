mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

#[tokio::test]
async fn get_categories_returns_id_type_map() {
    let ctx = common::setup().await;
    let (science, history) = common::seed_basic(&ctx.storage).await;

    let (status, body) = common::get(&ctx.app, "/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let categories = body["categories"].as_object().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[&science.to_string()], "Science");
    assert_eq!(categories[&history.to_string()], "History");
}

#[tokio::test]
async fn get_categories_returns_404_when_none_exist() {
    let ctx = common::setup().await;

    let (status, body) = common::get(&ctx.app, "/categories").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
async fn questions_in_category_filters_by_category() {
    let ctx = common::setup().await;
    let (science, history) = common::seed_basic(&ctx.storage).await;

    let (status, body) =
        common::get(&ctx.app, &format!("/categories/{history}/questions")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["current_category"], history);
    assert_eq!(body["total_questions"], 2);
    for question in body["questions"].as_array().unwrap() {
        assert_eq!(question["category"], history);
    }

    let (status, body) =
        common::get(&ctx.app, &format!("/categories/{science}/questions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 1);
}

#[tokio::test]
async fn questions_in_unknown_category_returns_404() {
    let ctx = common::setup().await;
    common::seed_basic(&ctx.storage).await;

    let (status, body) = common::get(&ctx.app, "/categories/999/questions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn questions_in_category_non_integer_id_returns_json_400() {
    let ctx = common::setup().await;
    common::seed_basic(&ctx.storage).await;

    let (status, body) = common::get(&ctx.app, "/categories/abc/questions").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 400);
    assert_eq!(body["message"], "category id must be a positive integer");
}

#[tokio::test]
async fn unknown_route_falls_back_to_json_404() {
    let ctx = common::setup().await;

    let (status, body) = common::get(&ctx.app, "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "resource not found");
}

#[tokio::test]
async fn cross_origin_requests_get_cors_headers() {
    let ctx = common::setup().await;
    common::seed_basic(&ctx.storage).await;

    let resp = ctx
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/categories")
                .header("origin", "http://example.com")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("access-control-allow-origin"));

    let preflight = ctx
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/categories")
                .header("origin", "http://example.com")
                .header("access-control-request-method", "GET")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let allow_methods = preflight
        .headers()
        .get("access-control-allow-methods")
        .expect("missing allow-methods header")
        .to_str()
        .unwrap();
    assert!(allow_methods.contains("GET"));
    assert!(allow_methods.contains("DELETE"));
}
