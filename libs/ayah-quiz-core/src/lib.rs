//! Core search and quiz engine for the ayah quiz service.
//!
//! Provides:
//! - Arabic text normalization (diacritics, letter variants, conjunction prefixes)
//! - Word-for-word translation annotation parser
//! - Two-phase verse matching over a read-only verse store
//! - Multiple-choice vocabulary quiz synthesis
//! - Shared types (VerseRecord, WordMeaning, QuizResponse, etc.)

pub mod engine;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod parser;
pub mod quiz;
pub mod store;
pub mod types;

pub use engine::{QuizEngine, DEFAULT_SUGGESTIONS, MAX_SUGGESTIONS};
pub use error::{QuizError, Result};
pub use matcher::{match_verse, VerseMatch};
pub use normalize::{
    canonicalize, join_conjunction_prefixes, search_needle, strip_diacritics, unify_heh,
    unify_kaf, unify_yaa,
};
pub use parser::{parse_annotations, word_meanings};
pub use quiz::{synthesize, MAX_DRAW_ATTEMPTS, OPTION_COUNT};
pub use store::{MemoryVerseStore, VerseStore};
pub use types::{
    AyahTranslation, MatchConfidence, QuizOption, QuizResponse, TranslationField, Translations,
    Translator, VerseRecord, WordMeaning,
};
