//! Arabic text normalization used for comparing queries with corpus text.
//!
//! Every function here is pure, total and idempotent. Stored corpus text is
//! never rewritten; canonical forms exist only for comparison.

use unicode_normalization::UnicodeNormalization;

/// The conjunction "and", written attached to the following word.
pub const CONJUNCTION_WAW: &str = "\u{0648}";

const YAA: char = '\u{064A}';
const ALEF_MAKSURA: char = '\u{0649}';
const ARABIC_KAF: char = '\u{0643}';
const PERSIAN_KAF: char = '\u{06A9}';
const HEH_DOACHASHMEE: char = '\u{06BE}';
const HEH: char = '\u{0647}';

/// Whether `c` is an Arabic combining mark (tashkeel).
pub fn is_tashkeel(c: char) -> bool {
    matches!(
        c,
        '\u{0610}'..='\u{061A}' | '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{06D6}'..='\u{06ED}'
    )
}

/// Remove tashkeel and apply NFKD to collapse presentation forms.
///
/// Marks are filtered again after decomposition since NFKD splits letters such
/// as alef-with-hamza into a base letter plus a mark from the same ranges.
pub fn strip_diacritics(s: &str) -> String {
    s.chars()
        .filter(|c| !is_tashkeel(*c))
        .nfkd()
        .filter(|c| !is_tashkeel(*c))
        .collect()
}

/// Map yaa (ي) to alef maksura (ى).
pub fn unify_yaa(s: &str) -> String {
    s.replace(YAA, &ALEF_MAKSURA.to_string())
}

/// Map Arabic kaf (ك) to Persian kaf (ک).
pub fn unify_kaf(s: &str) -> String {
    s.replace(ARABIC_KAF, &PERSIAN_KAF.to_string())
}

/// Map heh doachashmee (ھ) to heh (ه).
pub fn unify_heh(s: &str) -> String {
    s.replace(HEH_DOACHASHMEE, &HEH.to_string())
}

/// Join each standalone "و" token onto the token that follows it.
///
/// Consecutive lone "و" tokens chain onto the next real token. Lone "و" tokens
/// at the end have nothing to attach to and are kept as they are.
pub fn join_conjunction_prefixes<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut joined = Vec::with_capacity(tokens.len());
    let mut pending = 0usize;

    for token in tokens {
        let token = token.as_ref();
        if token == CONJUNCTION_WAW {
            pending += 1;
            continue;
        }
        if pending > 0 {
            joined.push(format!("{}{}", CONJUNCTION_WAW.repeat(pending), token));
            pending = 0;
        } else {
            joined.push(token.to_string());
        }
    }

    joined.extend(std::iter::repeat(CONJUNCTION_WAW.to_string()).take(pending));
    joined
}

/// Canonical form used for equality and containment checks.
///
/// Diacritics are stripped before letter unification; the result has no
/// whitespace and is case folded.
pub fn canonicalize(s: &str) -> String {
    let unified = unify_yaa(&unify_heh(&unify_kaf(&strip_diacritics(s))));
    unified
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Form of a query used for the broad substring scan over stored text.
///
/// Letters are not unified and stay composed (NFKC), so hamza-carrying
/// letters still match the stored diacritics-free text.
pub fn search_needle(s: &str) -> String {
    let composed: String = s.trim().nfkc().filter(|c| !is_tashkeel(*c)).collect();
    composed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Canonical tokens of a verse's diacritics-free text, with conjunctions joined.
pub fn verse_tokens(text: &str) -> Vec<String> {
    let composed: String = text.trim().nfkc().collect();
    let stripped = strip_diacritics(&composed);
    let words: Vec<&str> = stripped.split_whitespace().collect();
    join_conjunction_prefixes(&words)
        .iter()
        .map(|token| canonicalize(token))
        .collect()
}
