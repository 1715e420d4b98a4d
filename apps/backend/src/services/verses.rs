//! Verse source selected at startup.

use std::convert::Infallible;

use ayah_quiz_core::{MemoryVerseStore, VerseRecord, VerseStore};

use crate::db::Database;

/// Verse store backing the API: PostgreSQL or an in-memory corpus.
#[derive(Clone)]
pub enum VerseSource {
    Postgres(Database),
    Memory(MemoryVerseStore),
}

impl VerseSource {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

impl VerseStore for VerseSource {
    type Error = sqlx::Error;

    async fn scan_containing(&self, needle: &str) -> sqlx::Result<Vec<VerseRecord>> {
        match self {
            Self::Postgres(db) => db.scan_containing(needle).await,
            Self::Memory(store) => Ok(infallible(store.scan_containing(needle).await)),
        }
    }

    async fn surah(&self, surah_no: u32) -> sqlx::Result<Vec<VerseRecord>> {
        match self {
            Self::Postgres(db) => db.surah(surah_no).await,
            Self::Memory(store) => Ok(infallible(store.surah(surah_no).await)),
        }
    }

    async fn ayah(&self, surah_no: u32, ayah_no: u32) -> sqlx::Result<Option<VerseRecord>> {
        match self {
            Self::Postgres(db) => db.ayah(surah_no, ayah_no).await,
            Self::Memory(store) => Ok(infallible(store.ayah(surah_no, ayah_no).await)),
        }
    }
}
