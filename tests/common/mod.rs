#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use trivia::db::TriviaStorage;
use trivia::router::{TriviaState, trivia_router};

pub struct TestCtx {
    pub app: Router,
    pub storage: TriviaStorage,
    db_path: PathBuf,
}

impl Drop for TestCtx {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_path);
    }
}

/// Fresh app over a per-test temp sqlite file with the schema applied.
pub async fn setup() -> TestCtx {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut db_path = std::env::temp_dir();
    db_path.push(format!(
        "trivia-test-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", db_path.display());
    let storage = TriviaStorage::connect(&database_url)
        .await
        .expect("failed to open test database");
    storage
        .init_schema()
        .await
        .expect("failed to initialize schema");

    let app = trivia_router(TriviaState::new(storage.clone()));
    TestCtx {
        app,
        storage,
        db_path,
    }
}

/// Two categories and three questions; returns (science_id, history_id).
pub async fn seed_basic(storage: &TriviaStorage) -> (i64, i64) {
    let science = storage.create_category("Science").await.unwrap();
    let history = storage.create_category("History").await.unwrap();

    storage
        .create_question("What is the heaviest organ in the human body?", "The liver", science, 4)
        .await
        .unwrap();
    storage
        .create_question("What boxer's original name is Cassius Clay?", "Muhammad Ali", history, 1)
        .await
        .unwrap();
    storage
        .create_question("What movie earned Tom Hanks his third Oscar nomination?", "Apollo 13", history, 4)
        .await
        .unwrap();

    (science, history)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "GET", uri, None).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "DELETE", uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "POST", uri, Some(body)).await
}

pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(builder.body(body).expect("failed to build request"))
        .await
        .expect("request failed");

    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body was not json")
    };
    (status, json)
}
