//! Read-only verse store abstraction.

use std::convert::Infallible;
use std::future::Future;

use crate::types::VerseRecord;

/// Read access to the verse corpus.
///
/// Implementations return records in a stable order: surah, then ayah.
pub trait VerseStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// All records whose diacritics-free text contains `needle`, ignoring case.
    fn scan_containing(
        &self,
        needle: &str,
    ) -> impl Future<Output = Result<Vec<VerseRecord>, Self::Error>> + Send;

    /// All records of a surah in ayah order.
    fn surah(
        &self,
        surah_no: u32,
    ) -> impl Future<Output = Result<Vec<VerseRecord>, Self::Error>> + Send;

    /// A single record.
    fn ayah(
        &self,
        surah_no: u32,
        ayah_no: u32,
    ) -> impl Future<Output = Result<Option<VerseRecord>, Self::Error>> + Send;
}

/// Verse store backed by an in-memory table.
#[derive(Debug, Clone, Default)]
pub struct MemoryVerseStore {
    verses: Vec<VerseRecord>,
}

impl MemoryVerseStore {
    pub fn new(mut verses: Vec<VerseRecord>) -> Self {
        verses.sort_by_key(|v| (v.surah_no, v.ayah_no));
        Self { verses }
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VerseRecord> {
        self.verses.iter()
    }
}

impl VerseStore for MemoryVerseStore {
    type Error = Infallible;

    async fn scan_containing(&self, needle: &str) -> Result<Vec<VerseRecord>, Infallible> {
        let needle = needle.to_lowercase();
        Ok(self
            .verses
            .iter()
            .filter(|v| v.arabic_no_diacritics.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn surah(&self, surah_no: u32) -> Result<Vec<VerseRecord>, Infallible> {
        Ok(self
            .verses
            .iter()
            .filter(|v| v.surah_no == surah_no)
            .cloned()
            .collect())
    }

    async fn ayah(&self, surah_no: u32, ayah_no: u32) -> Result<Option<VerseRecord>, Infallible> {
        Ok(self
            .verses
            .iter()
            .find(|v| v.surah_no == surah_no && v.ayah_no == ayah_no)
            .cloned())
    }
}
