//! Multiple-choice vocabulary quiz synthesis.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{QuizError, Result};
use crate::matcher::VerseMatch;
use crate::normalize::canonicalize;
use crate::parser::word_meanings;
use crate::types::{QuizOption, QuizResponse, Translator, WordMeaning};

/// Options per quiz, one of them correct.
pub const OPTION_COUNT: usize = 4;

/// Random draws allowed before falling back to a deterministic sweep.
pub const MAX_DRAW_ATTEMPTS: usize = 32;

/// Build a quiz for `query` from the matched verse.
pub fn synthesize<R: Rng + ?Sized>(
    found: &VerseMatch,
    query: &str,
    translator: Translator,
    rng: &mut R,
) -> Result<QuizResponse> {
    let verse = &found.verse;
    let entries = word_meanings(verse.translation(translator));

    let correct = find_correct_entry(&entries, query)
        .cloned()
        .ok_or_else(|| QuizError::NoMatchingWord {
            query: query.trim().to_string(),
            surah_no: verse.surah_no,
            ayah_no: verse.ayah_no,
        })?;

    let mut options = Vec::with_capacity(OPTION_COUNT);
    options.push(QuizOption {
        meaning: correct.meaning.clone(),
        is_correct: true,
    });
    options.extend(
        draw_distractors(&entries, &correct, rng)
            .into_iter()
            .map(|meaning| QuizOption {
                meaning: meaning.to_string(),
                is_correct: false,
            }),
    );
    options.shuffle(rng);

    Ok(QuizResponse {
        surah_no: verse.surah_no,
        ayah_no: verse.ayah_no,
        arabic_new: verse.arabic_with_diacritics.clone(),
        arabic_no_diacritics: verse.arabic_no_diacritics.clone(),
        words_and_meanings: vec![correct],
        quiz_options: options,
        confidence: found.confidence,
    })
}

/// First entry whose canonical word contains the canonical query.
pub fn find_correct_entry<'a>(entries: &'a [WordMeaning], query: &str) -> Option<&'a WordMeaning> {
    let canonical_query = canonicalize(query);
    if canonical_query.is_empty() {
        return None;
    }
    entries
        .iter()
        .find(|entry| canonicalize(&entry.word).contains(&canonical_query))
}

/// Pick `OPTION_COUNT - 1` incorrect meanings.
///
/// Random draws only accept a different word with an unused meaning. When the
/// draw budget runs out the same rule is applied as an in-order sweep, then
/// meanings of other words are repeated. Only a verse with no other word
/// reuses the correct entry, so it still yields a full quiz.
fn draw_distractors<'a, R: Rng + ?Sized>(
    entries: &'a [WordMeaning],
    correct: &WordMeaning,
    rng: &mut R,
) -> Vec<&'a str> {
    let needed = OPTION_COUNT - 1;
    let mut picked = Vec::with_capacity(needed);
    let mut seen = HashSet::from([meaning_key(&correct.meaning)]);

    let mut attempts = 0;
    while picked.len() < needed && attempts < MAX_DRAW_ATTEMPTS {
        attempts += 1;
        let Some(candidate) = entries.choose(rng) else {
            break;
        };
        if candidate.word != correct.word && seen.insert(meaning_key(&candidate.meaning)) {
            picked.push(candidate.meaning.as_str());
        }
    }

    if picked.len() < needed {
        debug!(attempts, picked = picked.len(), "draw budget exhausted, sweeping entries");
        for candidate in entries {
            if picked.len() == needed {
                break;
            }
            if candidate.word != correct.word && seen.insert(meaning_key(&candidate.meaning)) {
                picked.push(candidate.meaning.as_str());
            }
        }
    }

    if picked.len() < needed {
        debug!(
            entries = entries.len(),
            "too few distinct meanings, allowing duplicates"
        );
        let others: Vec<&WordMeaning> = entries
            .iter()
            .filter(|candidate| candidate.word != correct.word)
            .collect();
        let pool: Vec<&WordMeaning> = if others.is_empty() {
            debug!("no other words in verse, offering the correct entry as a distractor");
            entries.iter().collect()
        } else {
            others
        };
        picked.extend(
            pool.into_iter()
                .cycle()
                .take(needed - picked.len())
                .map(|candidate| candidate.meaning.as_str()),
        );
    }

    picked
}

/// Comparison key for meanings: collapsed whitespace, case folded.
fn meaning_key(meaning: &str) -> String {
    meaning
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
