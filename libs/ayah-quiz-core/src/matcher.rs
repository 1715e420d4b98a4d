//! Two-phase verse matching: broad substring scan, then whole-token match.

use tracing::debug;

use crate::error::{QuizError, Result};
use crate::normalize::{canonicalize, search_needle, verse_tokens};
use crate::store::VerseStore;
use crate::types::{MatchConfidence, VerseRecord};

/// Verse chosen for a query.
#[derive(Debug, Clone)]
pub struct VerseMatch {
    pub verse: VerseRecord,
    pub confidence: MatchConfidence,
}

/// Find the best verse for a raw query.
///
/// The first candidate containing the query as a whole token wins. Without
/// one, the first substring candidate is returned as an approximate match.
pub async fn match_verse<S: VerseStore>(store: &S, query: &str) -> Result<VerseMatch> {
    let canonical = canonicalize(query);
    let needle = search_needle(query);
    if canonical.is_empty() || needle.is_empty() {
        return Err(QuizError::InvalidQuery);
    }

    let candidates = store
        .scan_containing(&needle)
        .await
        .map_err(QuizError::upstream)?;
    debug!(
        needle = %needle,
        candidates = candidates.len(),
        "partial phase finished"
    );

    select_candidate(candidates, &canonical).ok_or_else(|| QuizError::NoMatchingRecord {
        query: query.trim().to_string(),
    })
}

/// Pick the first exact candidate, else the first candidate at all.
pub fn select_candidate(candidates: Vec<VerseRecord>, canonical_query: &str) -> Option<VerseMatch> {
    let exact = candidates
        .iter()
        .position(|verse| is_exact_match(verse, canonical_query));

    match exact {
        Some(index) => {
            let verse = candidates.into_iter().nth(index)?;
            debug!(surah = verse.surah_no, ayah = verse.ayah_no, "exact match");
            Some(VerseMatch {
                verse,
                confidence: MatchConfidence::Exact,
            })
        }
        None => {
            let verse = candidates.into_iter().next()?;
            debug!(
                surah = verse.surah_no,
                ayah = verse.ayah_no,
                "no whole-token match, falling back to first partial candidate"
            );
            Some(VerseMatch {
                verse,
                confidence: MatchConfidence::Approximate,
            })
        }
    }
}

/// Whether the canonical query equals one of the verse's canonical tokens.
pub fn is_exact_match(verse: &VerseRecord, canonical_query: &str) -> bool {
    verse_tokens(&verse.arabic_no_diacritics)
        .iter()
        .any(|token| token == canonical_query)
}
