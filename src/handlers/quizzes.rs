use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::TriviaError;
use crate::router::TriviaState;

#[derive(Deserialize)]
pub struct QuizPayload {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: Option<QuizCategory>,
}

/// The frontend sends `{id, type}`; only the id matters here. Id 0 means
/// "all categories".
#[derive(Deserialize)]
pub struct QuizCategory {
    pub id: i64,
}

pub async fn play_quiz(
    State(state): State<TriviaState>,
    payload: Result<Json<QuizPayload>, JsonRejection>,
) -> Result<Json<Value>, TriviaError> {
    let Json(payload) = payload.map_err(|_| {
        TriviaError::BadRequest("Request does not contain a valid JSON body.".to_string())
    })?;

    let category = match payload.quiz_category.map(|c| c.id) {
        None | Some(0) => None,
        Some(id) if id < 0 => {
            return Err(TriviaError::BadRequest(
                "quiz_category id must not be negative".to_string(),
            ));
        }
        Some(id) => {
            if state.storage.get_category(id).await?.is_none() {
                return Err(TriviaError::NotFound(format!(
                    "Category with id {id} not found."
                )));
            }
            Some(id)
        }
    };

    let candidates = state.storage.quiz_candidates(category).await?;
    let remaining: Vec<_> = candidates
        .into_iter()
        .filter(|q| !payload.previous_questions.contains(&q.id))
        .collect();

    let question = remaining.choose(&mut rand::thread_rng());

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}
