//! Field-level validation for incoming payloads, plus the pagination helper.
//!
//! POST bodies are read as loose JSON and checked field by field so a missing
//! or mistyped field yields a 400 with a description rather than a generic
//! deserialization rejection.

use serde_json::Value;

use crate::error::TriviaError;

pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Row offset for a 1-based page number. Pages below 1 are rejected;
/// pages whose offset does not fit in an i64 are past the end of any
/// table, so they map to the same 404 as an ordinary empty page.
pub fn page_offset(page: i64) -> Result<i64, TriviaError> {
    if page < 1 {
        return Err(TriviaError::BadRequest("page must be >= 1".to_string()));
    }
    (page - 1)
        .checked_mul(QUESTIONS_PER_PAGE)
        .ok_or_else(|| TriviaError::NotFound(format!("page {page} is empty")))
}

/// Difficulty is an integer score between 1 and 5 inclusive.
pub fn validate_difficulty(value: Option<&Value>) -> Result<i64, TriviaError> {
    value
        .and_then(Value::as_i64)
        .filter(|d| (1..=5).contains(d))
        .ok_or_else(|| {
            TriviaError::BadRequest("difficulty must be an integer between 1 and 5".to_string())
        })
}

/// Category references must be positive integers; existence is checked
/// against storage by the handler.
pub fn validate_category_ref(value: Option<&Value>) -> Result<i64, TriviaError> {
    value
        .and_then(Value::as_i64)
        .filter(|c| *c >= 1)
        .ok_or_else(|| TriviaError::BadRequest("category must be a positive integer".to_string()))
}

/// Question and answer text must be non-empty once trimmed; the trimmed
/// form is what gets stored.
pub fn validate_text(value: Option<&Value>, field: &str) -> Result<String, TriviaError> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| TriviaError::BadRequest(format!("{field} must be a non-empty string")))
}

/// Path ids must be positive integers.
pub fn validate_id(id: i64, what: &str) -> Result<i64, TriviaError> {
    if id < 1 {
        return Err(TriviaError::BadRequest(format!(
            "{what} id must be a positive integer"
        )));
    }
    Ok(id)
}
