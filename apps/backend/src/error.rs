//! Error handling for the backend API

use std::time::Duration;

use ayah_quiz_core::QuizError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error("Verse store timed out after {0:?}")]
    Timeout(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Error response body: `{"message": ...}` or `{"error": ...}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum ErrorBody {
    Message(String),
    Error(String),
}

const INTERNAL_MESSAGE: &str = "Internal server error";

impl ApiError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            ApiError::Quiz(QuizError::InvalidQuery) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::Message("Invalid search term.".to_string()),
            ),
            ApiError::Quiz(QuizError::NoMatchingRecord { .. }) => (
                StatusCode::NOT_FOUND,
                ErrorBody::Message("No matching record found.".to_string()),
            ),
            ApiError::Quiz(QuizError::NoMatchingWord { .. }) => (
                StatusCode::NOT_FOUND,
                ErrorBody::Error("No matching word and meaning found".to_string()),
            ),
            ApiError::Quiz(QuizError::SurahNotFound { .. }) => (
                StatusCode::NOT_FOUND,
                ErrorBody::Error("Surah not found".to_string()),
            ),
            ApiError::Quiz(QuizError::AyahNotFound { .. }) => (
                StatusCode::NOT_FOUND,
                ErrorBody::Error("Ayah not found".to_string()),
            ),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, ErrorBody::Message(message.clone()))
            }
            ApiError::Quiz(QuizError::Upstream(_))
            | ApiError::Database(_)
            | ApiError::Migration(_)
            | ApiError::Timeout(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::Message(INTERNAL_MESSAGE.to_string()),
            ),
        }
    }

    /// Whether the client may retry the same request.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Quiz(error) => error.is_retryable(),
            ApiError::Database(_) | ApiError::Timeout(_) => true,
            ApiError::Migration(_) | ApiError::BadRequest(_) => false,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        if status.is_server_error() {
            tracing::error!(error = %self, retryable = self.is_retryable(), "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
