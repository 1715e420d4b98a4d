//! JSON corpus loading for the in-memory verse store.
//!
//! The file is a JSON array of verse records. Both the camelCase field names
//! and the spreadsheet column names (`AyatNew`, `TarjumaLafziDrFarhatHashmi`,
//! ...) are accepted.

use std::path::Path;

use ayah_quiz_core::{MemoryVerseStore, VerseRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid corpus JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("corpus is empty")]
    Empty,
}

/// Parse corpus JSON into a verse store.
pub fn parse_corpus(content: &str) -> Result<MemoryVerseStore, CorpusError> {
    let verses: Vec<VerseRecord> = serde_json::from_str(content)?;
    if verses.is_empty() {
        return Err(CorpusError::Empty);
    }
    Ok(MemoryVerseStore::new(verses))
}

/// Read and parse a corpus file.
pub async fn load_corpus(path: &Path) -> Result<MemoryVerseStore, CorpusError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CorpusError::Io {
            path: path.display().to_string(),
            source,
        })?;
    let store = parse_corpus(&content)?;
    tracing::info!("Loaded {} verses from {}", store.len(), path.display());
    Ok(store)
}
