use std::collections::BTreeMap;

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::db::Category;
use crate::error::TriviaError;
use crate::router::TriviaState;
use crate::validate;

/// Categories are served as an `{id: type}` object, matching what the
/// frontend expects.
pub(crate) fn categories_map(categories: &[Category]) -> BTreeMap<i64, &str> {
    categories.iter().map(|c| (c.id, c.kind.as_str())).collect()
}

pub async fn list_categories(
    State(state): State<TriviaState>,
) -> Result<Json<Value>, TriviaError> {
    let categories = state.storage.list_categories().await?;
    if categories.is_empty() {
        return Err(TriviaError::NotFound("no categories found".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "categories": categories_map(&categories),
    })))
}

pub async fn questions_in_category(
    State(state): State<TriviaState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, TriviaError> {
    let Path(category_id) = path.map_err(|_| {
        TriviaError::BadRequest("category id must be a positive integer".to_string())
    })?;
    let category_id = validate::validate_id(category_id, "category")?;

    if state.storage.get_category(category_id).await?.is_none() {
        return Err(TriviaError::NotFound(format!(
            "Category with id {category_id} not found."
        )));
    }

    let questions = state.storage.questions_in_category(category_id).await?;
    let total = questions.len();

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": total,
        "current_category": category_id,
    })))
}
