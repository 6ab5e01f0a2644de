use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::TriviaError;
use crate::handlers::categories::categories_map;
use crate::router::TriviaState;
use crate::validate::{
    self, QUESTIONS_PER_PAGE, page_offset, validate_category_ref, validate_difficulty,
    validate_text,
};

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

pub async fn list_questions(
    State(state): State<TriviaState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Value>, TriviaError> {
    let Query(PageQuery { page }) =
        query.map_err(|_| TriviaError::BadRequest("page must be an integer".to_string()))?;
    let page = page.unwrap_or(1);
    let offset = page_offset(page)?;

    let questions = state
        .storage
        .list_questions_page(QUESTIONS_PER_PAGE, offset)
        .await?;
    if questions.is_empty() && page != 1 {
        return Err(TriviaError::NotFound(format!("page {page} is empty")));
    }

    let total_questions = state.storage.count_questions().await?;
    let categories = state.storage.list_categories().await?;

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": total_questions,
        "categories": categories_map(&categories),
        "current_category": Value::Null,
    })))
}

pub async fn create_question(
    State(state): State<TriviaState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, TriviaError> {
    let Json(body) = body.map_err(|_| {
        TriviaError::BadRequest("Request does not contain a valid JSON body.".to_string())
    })?;

    let difficulty = validate_difficulty(body.get("difficulty"))?;
    let category = validate_category_ref(body.get("category"))?;
    let question = validate_text(body.get("question"), "question")?;
    let answer = validate_text(body.get("answer"), "answer")?;

    if state.storage.get_category(category).await?.is_none() {
        return Err(TriviaError::BadRequest(format!(
            "Category with id {category} does not exist"
        )));
    }

    let created = state
        .storage
        .create_question(&question, &answer, category, difficulty)
        .await?;

    Ok(Json(json!({
        "success": true,
        "created": created,
    })))
}

pub async fn delete_question(
    State(state): State<TriviaState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, TriviaError> {
    let Path(question_id) = path.map_err(|_| {
        TriviaError::BadRequest("question id must be a positive integer".to_string())
    })?;
    let question_id = validate::validate_id(question_id, "question")?;

    if state.storage.get_question(question_id).await?.is_none() {
        return Err(TriviaError::NotFound(format!(
            "Question with id {question_id} not found."
        )));
    }

    state.storage.delete_question(question_id).await.map_err(|e| {
        tracing::warn!(error = %e, question_id, "delete failed");
        TriviaError::Unprocessable(format!(
            "Unable to delete question with id {question_id}."
        ))
    })?;

    Ok(Json(json!({
        "success": true,
        "deleted": question_id,
    })))
}

#[derive(Deserialize)]
pub struct SearchPayload {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

pub async fn search_questions(
    State(state): State<TriviaState>,
    payload: Result<Json<SearchPayload>, JsonRejection>,
) -> Result<Json<Value>, TriviaError> {
    let Json(payload) = payload.map_err(|_| {
        TriviaError::BadRequest("Request does not contain a valid JSON body.".to_string())
    })?;

    let term = payload
        .search_term
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            TriviaError::BadRequest("searchTerm must be a non-empty string".to_string())
        })?;

    let questions = state.storage.search_questions(term).await?;
    let total = questions.len();

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": total,
        "current_category": Value::Null,
    })))
}
