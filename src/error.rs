use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum TriviaError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unprocessable: {0}")]
    Unprocessable(String),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            TriviaError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            TriviaError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            TriviaError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            TriviaError::Database(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };
        (status, Json(ApiErrorBody::new(status, message))).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ApiErrorBody {
    fn new(status: StatusCode, message: String) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message,
        }
    }
}
