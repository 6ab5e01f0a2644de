use axum::http::{Method, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::TriviaStorage;
use crate::handlers::{categories, questions, quizzes};

#[derive(Clone)]
pub struct TriviaState {
    pub storage: TriviaStorage,
}

impl TriviaState {
    pub fn new(storage: TriviaStorage) -> Self {
        Self { storage }
    }
}

pub fn trivia_router(state: TriviaState) -> Router {
    // Open CORS: the API is consumed by a browser frontend on another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]);

    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(categories::questions_in_category),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/{question_id}", delete(questions::delete_question))
        .route("/questions/search", post(questions::search_questions))
        .route("/quizzes", post(quizzes::play_quiz))
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "success": false,
                    "error": 404,
                    "message": "resource not found",
                })),
            )
                .into_response()
        })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
