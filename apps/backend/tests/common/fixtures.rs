//! Test fixtures and factory functions for creating test data.

use ayah_quiz_backend::models::{TranslationField, Translations, VerseRecord, WordMeaning};

/// The corpus bundled with the backend.
pub const SAMPLE_CORPUS: &str = include_str!("../../data/sample_corpus.json");

/// Surah number reserved for database tests, outside the real 1..=114 range.
pub const TEST_SURAH: u32 = 901;

/// Build a verse whose plain text doubles as its diacritized text.
pub fn verse(surah_no: u32, ayah_no: u32, text: &str, annotated: &str) -> VerseRecord {
    VerseRecord {
        surah_no,
        ayah_no,
        arabic_with_diacritics: text.to_string(),
        arabic_no_diacritics: text.to_string(),
        translations: Translations {
            farhat_hashmi: Some(TranslationField::Annotated(annotated.to_string())),
            ..Translations::default()
        },
    }
}

/// FarhatHashmi column as stored in the database: annotated text or a JSON array.
pub fn column_text(verse: &VerseRecord) -> Option<String> {
    match &verse.translations.farhat_hashmi {
        Some(TranslationField::Annotated(text)) => Some(text.clone()),
        Some(TranslationField::Structured(entries)) => {
            Some(serde_json::to_string(entries).expect("entries serialize"))
        }
        None => None,
    }
}

/// Build a verse whose translation is a structured word list.
pub fn structured_verse(surah_no: u32, ayah_no: u32, text: &str, entries: &[(&str, &str)]) -> VerseRecord {
    VerseRecord {
        surah_no,
        ayah_no,
        arabic_with_diacritics: text.to_string(),
        arabic_no_diacritics: text.to_string(),
        translations: Translations {
            farhat_hashmi: Some(TranslationField::Structured(
                entries
                    .iter()
                    .map(|(word, meaning)| WordMeaning::new(*word, *meaning))
                    .collect(),
            )),
            ..Translations::default()
        },
    }
}

/// Verses for database tests under TEST_SURAH.
pub fn test_surah_verses() -> Vec<VerseRecord> {
    vec![
        verse(
            TEST_SURAH,
            1,
            "الكتابة فن",
            "[الكتابة: writing] [فن: is an art]",
        ),
        verse(
            TEST_SURAH,
            2,
            "قال و كتب الرسالة اليوم",
            "[قال: he said] [وكتب: and wrote] [الرسالة: the letter] [اليوم: today]",
        ),
        structured_verse(
            TEST_SURAH,
            3,
            "علم بالقلم",
            &[("علم", "taught"), ("بالقلم", "by the pen")],
        ),
    ]
}
