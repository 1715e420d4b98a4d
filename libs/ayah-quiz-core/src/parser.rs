//! Parser for word-for-word translation annotations.
//!
//! # Format
//! ```text
//! [بسم: in the name] [الله: of Allah] [الرحمن: the Most Gracious]
//! ```
//!
//! Text outside brackets is ignored. Malformed or nested brackets are
//! skipped; parsing never fails.

use crate::types::{TranslationField, WordMeaning};
use once_cell::sync::Lazy;
use regex::Regex;

static ANNOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\[\]:]+):([^\[\]]+)\]").expect("annotation pattern is valid")
});

/// Parse every `[word: meaning]` segment, left to right.
pub fn parse_annotations(text: &str) -> Vec<WordMeaning> {
    ANNOTATION
        .captures_iter(text)
        .filter_map(|caps| {
            let word = caps.get(1)?.as_str().trim();
            let meaning = caps.get(2)?.as_str().trim();
            if word.is_empty() || meaning.is_empty() {
                return None;
            }
            Some(WordMeaning::new(word, meaning))
        })
        .collect()
}

/// Word list of a translation field; structured lists pass through unchanged.
pub fn word_meanings(field: Option<&TranslationField>) -> Vec<WordMeaning> {
    match field {
        Some(TranslationField::Structured(entries)) => entries.clone(),
        Some(TranslationField::Annotated(text)) => parse_annotations(text),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_single_annotation() {
        assert_eq!(
            parse_annotations("[كتب: wrote]"),
            vec![WordMeaning::new("كتب", "wrote")]
        );
    }

    #[test]
    fn parse_skips_text_between_segments() {
        assert_eq!(
            parse_annotations("[a: one] garbage [b: two]"),
            vec![WordMeaning::new("a", "one"), WordMeaning::new("b", "two")]
        );
    }

    #[test]
    fn parse_trims_meaning() {
        assert_eq!(
            parse_annotations("[الحمد:   all praise  ]"),
            vec![WordMeaning::new("الحمد", "all praise")]
        );
    }

    #[test]
    fn parse_keeps_order_of_appearance() {
        let parsed = parse_annotations("[ج: third] [ا: first] [ب: second]");
        let words: Vec<&str> = parsed.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["ج", "ا", "ب"]);
    }

    #[test]
    fn parse_skips_malformed_brackets() {
        assert_eq!(
            parse_annotations("[broken [a: one] [no colon] [: empty word] [b:] [c: three"),
            vec![WordMeaning::new("a", "one")]
        );
    }

    #[test]
    fn parse_meaning_may_contain_colons() {
        assert_eq!(
            parse_annotations("[قال: he said: listen]"),
            vec![WordMeaning::new("قال", "he said: listen")]
        );
    }

    #[test]
    fn parse_without_segments_is_empty() {
        assert!(parse_annotations("").is_empty());
        assert!(parse_annotations("plain translation text").is_empty());
    }

    #[test]
    fn structured_field_passes_through() {
        let entries = vec![WordMeaning::new("بسم", "in the name")];
        let field = TranslationField::Structured(entries.clone());
        assert_eq!(word_meanings(Some(&field)), entries);
    }

    #[test]
    fn absent_field_is_empty() {
        assert!(word_meanings(None).is_empty());
    }
}
