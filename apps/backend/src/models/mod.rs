//! Database models and API types

use std::num::TryFromIntError;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from ayah-quiz-core
pub use ayah_quiz_core::types::{
    AyahTranslation, MatchConfidence, QuizOption, QuizResponse, TranslationField, Translations,
    Translator, VerseRecord, WordMeaning,
};

// === Database Entity Types ===

/// Verse stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbVerse {
    pub surah_no: i32,
    pub ayah_no: i32,
    pub arabic_with_diacritics: String,
    pub arabic_no_diacritics: String,
    pub tarjuma_lafzi_farhat_hashmi: Option<String>,
    pub tarjuma_lafzi_fahmul_quran: Option<String>,
    pub tarjuma_lafzi_nazar_ahmad: Option<String>,
}

impl DbVerse {
    /// Convert to core verse record
    ///
    /// Fails on negative surah or ayah numbers.
    pub fn to_verse_record(&self) -> Result<VerseRecord, TryFromIntError> {
        Ok(VerseRecord {
            surah_no: u32::try_from(self.surah_no)?,
            ayah_no: u32::try_from(self.ayah_no)?,
            arabic_with_diacritics: self.arabic_with_diacritics.clone(),
            arabic_no_diacritics: self.arabic_no_diacritics.clone(),
            translations: Translations {
                farhat_hashmi: translation_column(&self.tarjuma_lafzi_farhat_hashmi),
                fahmul_quran: translation_column(&self.tarjuma_lafzi_fahmul_quran),
                nazar_ahmad: translation_column(&self.tarjuma_lafzi_nazar_ahmad),
            },
        })
    }
}

/// A column holds either a JSON array of `{word, meaning}` or annotated text
fn translation_column(column: &Option<String>) -> Option<TranslationField> {
    let text = column.as_ref()?;
    match serde_json::from_str::<Vec<WordMeaning>>(text) {
        Ok(entries) => Some(TranslationField::Structured(entries)),
        Err(_) => Some(TranslationField::Annotated(text.clone())),
    }
}

// === API Request Types ===

/// Query string of GET /api/quran/search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "searchWord", default)]
    pub search_word: Option<String>,
    #[serde(default)]
    pub translator: Option<String>,
}

/// Query string carrying an optional translator
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslatorQuery {
    #[serde(default)]
    pub translator: Option<String>,
}

/// Query string of GET /api/quran/autocomplete
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AutocompleteQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

// === API Response Types ===

/// Quiz response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuizBody {
    pub surah_no: u32,
    pub ayah_no: u32,
    pub ayat_new: String,
    pub ayat_no_araab: String,
    pub words_and_meanings: Vec<WordMeaning>,
    pub quiz_options: Vec<QuizOption>,
    pub confidence: MatchConfidence,
}

impl From<QuizResponse> for QuizBody {
    fn from(quiz: QuizResponse) -> Self {
        Self {
            surah_no: quiz.surah_no,
            ayah_no: quiz.ayah_no,
            ayat_new: quiz.arabic_new,
            ayat_no_araab: quiz.arabic_no_diacritics,
            words_and_meanings: quiz.words_and_meanings,
            quiz_options: quiz.quiz_options,
            confidence: quiz.confidence,
        }
    }
}

/// One ayah with its word-for-word translation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AyahBody {
    #[serde(rename = "surahNo")]
    pub surah_no: u32,
    #[serde(rename = "ayahNo")]
    pub ayah_no: u32,
    #[serde(rename = "AyatNew")]
    pub ayat_new: String,
    #[serde(rename = "AyatNoAraab")]
    pub ayat_no_araab: String,
    pub translator: Translator,
    pub translation: Vec<WordMeaning>,
}

impl AyahBody {
    pub fn new(ayah: AyahTranslation, translator: Translator) -> Self {
        Self {
            surah_no: ayah.surah_no,
            ayah_no: ayah.ayah_no,
            ayat_new: ayah.arabic_new,
            ayat_no_araab: ayah.arabic_no_diacritics,
            translator,
            translation: ayah.translation,
        }
    }
}

/// Word-for-word translation of a whole surah
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahTranslationResponse {
    pub surah_no: u32,
    pub translator: Translator,
    pub ayahs: Vec<SurahAyah>,
}

/// Ayah entry inside a surah response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurahAyah {
    #[serde(rename = "ayahNo")]
    pub ayah_no: u32,
    #[serde(rename = "AyatNew")]
    pub ayat_new: String,
    #[serde(rename = "AyatNoAraab")]
    pub ayat_no_araab: String,
    pub translation: Vec<WordMeaning>,
}

impl From<AyahTranslation> for SurahAyah {
    fn from(ayah: AyahTranslation) -> Self {
        Self {
            ayah_no: ayah.ayah_no,
            ayat_new: ayah.arabic_new,
            ayat_no_araab: ayah.arabic_no_diacritics,
            translation: ayah.translation,
        }
    }
}
