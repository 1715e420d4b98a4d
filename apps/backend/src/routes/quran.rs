//! Verse search, quiz and translation endpoints

use std::future::Future;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/quran/search?searchWord=...
/// Finds the verse for a word and builds a vocabulary quiz for it
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<QuizBody>> {
    let translator = resolve_translator(query.translator.as_deref())?;
    let search_word = query.search_word.unwrap_or_default();

    let quiz = with_store_timeout(&state, state.engine.quiz(&search_word, translator)).await?;

    tracing::info!(
        surah = quiz.surah_no,
        ayah = quiz.ayah_no,
        confidence = ?quiz.confidence,
        "quiz generated"
    );

    Ok(Json(QuizBody::from(quiz)))
}

/// GET /api/quran/surah/:surah_no/translation/:translator
pub async fn surah_translation(
    State(state): State<AppState>,
    Path((surah_no, translator)): Path<(u32, String)>,
) -> Result<Json<SurahTranslationResponse>> {
    let translator = resolve_translator(Some(&translator))?;
    let ayahs = with_store_timeout(
        &state,
        state.engine.surah_translation(surah_no, translator),
    )
    .await?;

    Ok(Json(SurahTranslationResponse {
        surah_no,
        translator,
        ayahs: ayahs.into_iter().map(SurahAyah::from).collect(),
    }))
}

/// GET /api/quran/ayah/:surah_no/:ayah_no
pub async fn ayah(
    State(state): State<AppState>,
    Path((surah_no, ayah_no)): Path<(u32, u32)>,
    Query(query): Query<TranslatorQuery>,
) -> Result<Json<AyahBody>> {
    let translator = resolve_translator(query.translator.as_deref())?;
    let ayah = with_store_timeout(&state, state.engine.ayah(surah_no, ayah_no, translator)).await?;
    Ok(Json(AyahBody::new(ayah, translator)))
}

/// GET /api/quran/autocomplete?query=...
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(query): Query<AutocompleteQuery>,
) -> Result<Json<Vec<String>>> {
    let prefix = query.query.unwrap_or_default();
    let suggestions =
        with_store_timeout(&state, state.engine.suggest(&prefix, query.limit)).await?;
    Ok(Json(suggestions))
}

fn resolve_translator(name: Option<&str>) -> Result<Translator> {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        None => Ok(Translator::default()),
        Some(name) => Translator::from_str(name)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown translator: {}", name))),
    }
}

/// Bound an engine call by the configured verse store timeout
async fn with_store_timeout<T, F>(state: &AppState, operation: F) -> Result<T>
where
    F: Future<Output = ayah_quiz_core::Result<T>>,
{
    match tokio::time::timeout(state.store_timeout, operation).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(ApiError::Timeout(state.store_timeout)),
    }
}
