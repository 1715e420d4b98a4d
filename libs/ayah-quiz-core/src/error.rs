//! Error types for ayah-quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors that can occur while searching verses or building a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("invalid search term")]
    InvalidQuery,

    #[error("no verse matches {query:?}")]
    NoMatchingRecord { query: String },

    #[error("no word-for-word entry matches {query:?} in {surah_no}:{ayah_no}")]
    NoMatchingWord {
        query: String,
        surah_no: u32,
        ayah_no: u32,
    },

    #[error("surah {surah_no} not found")]
    SurahNotFound { surah_no: u32 },

    #[error("ayah {surah_no}:{ayah_no} not found")]
    AyahNotFound { surah_no: u32, ayah_no: u32 },

    #[error("verse store failure: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl QuizError {
    /// Wrap a verse store error.
    pub fn upstream<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Upstream(Box::new(err))
    }

    /// Whether the caller may retry the same request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}
