//! Core types for the verse search and quiz engine.

use serde::{Deserialize, Serialize};

/// Author of a word-for-word translation column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Translator {
    FarhatHashmi,
    FahmulQuran,
    NazarAhmad,
}

impl Default for Translator {
    fn default() -> Self {
        Self::FarhatHashmi
    }
}

impl Translator {
    pub const ALL: [Translator; 3] = [Self::FarhatHashmi, Self::FahmulQuran, Self::NazarAhmad];

    /// Get the translator name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FarhatHashmi => "farhat_hashmi",
            Self::FahmulQuran => "fahmul_quran",
            Self::NazarAhmad => "nazar_ahmad",
        }
    }

    /// Column name used by the imported corpus spreadsheets.
    pub fn column_name(&self) -> &'static str {
        match self {
            Self::FarhatHashmi => "TarjumaLafziDrFarhatHashmi",
            Self::FahmulQuran => "TarjumaLafziFahmulQuran",
            Self::NazarAhmad => "TarjumaLafziNazarAhmad",
        }
    }

    /// Parse from either the short name or the corpus column name.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s || t.column_name() == s)
    }
}

/// One lexical unit of a verse's word-for-word translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMeaning {
    pub word: String,
    pub meaning: String,
}

impl WordMeaning {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
        }
    }
}

/// A translation column, stored either pre-parsed or as `[word: meaning]` text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationField {
    Structured(Vec<WordMeaning>),
    Annotated(String),
}

/// Word-for-word translation columns of a verse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "TarjumaLafziDrFarhatHashmi"
    )]
    pub farhat_hashmi: Option<TranslationField>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "TarjumaLafziFahmulQuran"
    )]
    pub fahmul_quran: Option<TranslationField>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "TarjumaLafziNazarAhmad"
    )]
    pub nazar_ahmad: Option<TranslationField>,
}

impl Translations {
    pub fn get(&self, translator: Translator) -> Option<&TranslationField> {
        match translator {
            Translator::FarhatHashmi => self.farhat_hashmi.as_ref(),
            Translator::FahmulQuran => self.fahmul_quran.as_ref(),
            Translator::NazarAhmad => self.nazar_ahmad.as_ref(),
        }
    }
}

/// Immutable corpus entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseRecord {
    #[serde(alias = "SuraID")]
    pub surah_no: u32,
    #[serde(alias = "AyaNo")]
    pub ayah_no: u32,
    #[serde(alias = "AyatNew")]
    pub arabic_with_diacritics: String,
    #[serde(alias = "AyatNoAraab")]
    pub arabic_no_diacritics: String,
    #[serde(flatten)]
    pub translations: Translations,
}

impl VerseRecord {
    pub fn translation(&self, translator: Translator) -> Option<&TranslationField> {
        self.translations.get(translator)
    }
}

/// How the chosen verse was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchConfidence {
    /// The query equals a whole (conjunction-joined) token of the verse.
    Exact,
    /// The query only occurs inside the verse text; first partial candidate.
    Approximate,
}

/// One answer of a vocabulary quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub meaning: String,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
}

/// Complete quiz for one search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub surah_no: u32,
    pub ayah_no: u32,
    pub arabic_new: String,
    pub arabic_no_diacritics: String,
    pub words_and_meanings: Vec<WordMeaning>,
    pub quiz_options: Vec<QuizOption>,
    pub confidence: MatchConfidence,
}

impl QuizResponse {
    /// The option flagged as correct.
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.quiz_options.iter().find(|o| o.is_correct)
    }
}

/// A verse with one parsed word-for-word translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AyahTranslation {
    pub surah_no: u32,
    pub ayah_no: u32,
    pub arabic_new: String,
    pub arabic_no_diacritics: String,
    pub translation: Vec<WordMeaning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translator_parses_both_name_forms() {
        assert_eq!(
            Translator::from_str("fahmul_quran"),
            Some(Translator::FahmulQuran)
        );
        assert_eq!(
            Translator::from_str("TarjumaLafziNazarAhmad"),
            Some(Translator::NazarAhmad)
        );
        assert_eq!(Translator::from_str("jalandhri"), None);
    }

    #[test]
    fn verse_record_reads_corpus_column_names() {
        let json = r#"{
            "SuraID": 1,
            "AyaNo": 2,
            "AyatNew": "ٱلْحَمْدُ لِلَّهِ",
            "AyatNoAraab": "الحمد لله",
            "TarjumaLafziDrFarhatHashmi": "[الحمد: all praise] [لله: for Allah]",
            "_id": "ignored"
        }"#;
        let verse: VerseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(verse.surah_no, 1);
        assert_eq!(verse.ayah_no, 2);
        assert_eq!(verse.arabic_no_diacritics, "الحمد لله");
        assert!(matches!(
            verse.translation(Translator::FarhatHashmi),
            Some(TranslationField::Annotated(_))
        ));
        assert!(verse.translation(Translator::NazarAhmad).is_none());
    }

    #[test]
    fn structured_translation_deserializes_as_list() {
        let json = r#"{
            "surahNo": 1,
            "ayahNo": 1,
            "arabicWithDiacritics": "بِسْمِ",
            "arabicNoDiacritics": "بسم",
            "farhatHashmi": [{"word": "بسم", "meaning": "in the name"}]
        }"#;
        let verse: VerseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            verse.translation(Translator::FarhatHashmi),
            Some(&TranslationField::Structured(vec![WordMeaning::new(
                "بسم",
                "in the name"
            )]))
        );
    }

    #[test]
    fn quiz_option_uses_is_correct_key() {
        let option = QuizOption {
            meaning: "wrote".to_string(),
            is_correct: true,
        };
        let value = serde_json::to_value(&option).unwrap();
        assert_eq!(value["isCorrect"], true);
    }
}
