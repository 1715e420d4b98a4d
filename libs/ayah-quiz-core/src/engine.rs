//! Request-level facade over the matcher, parser and quiz synthesizer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{QuizError, Result};
use crate::matcher::match_verse;
use crate::normalize::search_needle;
use crate::parser::word_meanings;
use crate::quiz::synthesize;
use crate::store::VerseStore;
use crate::types::{AyahTranslation, QuizResponse, Translator, VerseRecord};

/// Suggestions returned when the caller gives no limit.
pub const DEFAULT_SUGGESTIONS: usize = 10;

/// Upper bound on suggestions per request.
pub const MAX_SUGGESTIONS: usize = 50;

/// Search and quiz engine over a verse store.
#[derive(Debug, Clone)]
pub struct QuizEngine<S> {
    store: S,
}

impl<S: VerseStore> QuizEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Find the verse for `query` and build a quiz for the queried word.
    pub async fn quiz(&self, query: &str, translator: Translator) -> Result<QuizResponse> {
        if query.trim().is_empty() {
            return Err(QuizError::InvalidQuery);
        }
        let found = match_verse(&self.store, query).await?;
        // Seeded after the store read so the future stays Send.
        let mut rng = StdRng::from_entropy();
        synthesize(&found, query, translator, &mut rng)
    }

    /// Same as [`quiz`](Self::quiz) with a caller-provided random source.
    pub async fn quiz_with_rng<R: Rng + Send>(
        &self,
        query: &str,
        translator: Translator,
        rng: &mut R,
    ) -> Result<QuizResponse> {
        if query.trim().is_empty() {
            return Err(QuizError::InvalidQuery);
        }
        let found = match_verse(&self.store, query).await?;
        synthesize(&found, query, translator, rng)
    }

    /// Every ayah of a surah with its parsed word-for-word translation.
    pub async fn surah_translation(
        &self,
        surah_no: u32,
        translator: Translator,
    ) -> Result<Vec<AyahTranslation>> {
        let verses = self
            .store
            .surah(surah_no)
            .await
            .map_err(QuizError::upstream)?;
        if verses.is_empty() {
            return Err(QuizError::SurahNotFound { surah_no });
        }
        Ok(verses
            .iter()
            .map(|verse| ayah_translation(verse, translator))
            .collect())
    }

    /// One ayah with its parsed word-for-word translation.
    pub async fn ayah(
        &self,
        surah_no: u32,
        ayah_no: u32,
        translator: Translator,
    ) -> Result<AyahTranslation> {
        self.store
            .ayah(surah_no, ayah_no)
            .await
            .map_err(QuizError::upstream)?
            .map(|verse| ayah_translation(&verse, translator))
            .ok_or(QuizError::AyahNotFound { surah_no, ayah_no })
    }

    /// Distinct verse texts starting with `prefix`, in store order.
    pub async fn suggest(&self, prefix: &str, limit: Option<usize>) -> Result<Vec<String>> {
        let needle = search_needle(prefix);
        if needle.is_empty() {
            return Err(QuizError::InvalidQuery);
        }
        let limit = limit
            .unwrap_or(DEFAULT_SUGGESTIONS)
            .clamp(1, MAX_SUGGESTIONS);

        let candidates = self
            .store
            .scan_containing(&needle)
            .await
            .map_err(QuizError::upstream)?;

        let mut suggestions: Vec<String> = Vec::new();
        for verse in candidates {
            if suggestions.len() == limit {
                break;
            }
            if search_needle(&verse.arabic_no_diacritics).starts_with(&needle)
                && !suggestions.contains(&verse.arabic_no_diacritics)
            {
                suggestions.push(verse.arabic_no_diacritics);
            }
        }
        debug!(prefix = %needle, count = suggestions.len(), "suggestions");
        Ok(suggestions)
    }
}

fn ayah_translation(verse: &VerseRecord, translator: Translator) -> AyahTranslation {
    AyahTranslation {
        surah_no: verse.surah_no,
        ayah_no: verse.ayah_no,
        arabic_new: verse.arabic_with_diacritics.clone(),
        arabic_no_diacritics: verse.arabic_no_diacritics.clone(),
        translation: word_meanings(verse.translation(translator)),
    }
}
