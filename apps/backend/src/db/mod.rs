//! PostgreSQL verse store

use std::time::Duration;

use ayah_quiz_core::VerseStore;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::error::{ApiError, Result};
use crate::models::*;

const VERSE_COLUMNS: &str = r#"
    surah_no, ayah_no, arabic_with_diacritics, arabic_no_diacritics,
    tarjuma_lafzi_farhat_hashmi, tarjuma_lafzi_fahmul_quran, tarjuma_lafzi_nazar_ahmad
"#;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Verse Repository ===

    /// Verses whose diacritics-free text contains `needle`, ignoring case
    pub async fn find_verses_containing(&self, needle: &str) -> sqlx::Result<Vec<DbVerse>> {
        sqlx::query_as::<_, DbVerse>(&format!(
            r#"
            SELECT {VERSE_COLUMNS}
            FROM verses
            WHERE strpos(lower(arabic_no_diacritics), lower($1)) > 0
            ORDER BY surah_no, ayah_no
            "#
        ))
        .bind(needle)
        .fetch_all(&self.pool)
        .await
    }

    /// All verses of a surah in ayah order
    pub async fn get_surah(&self, surah_no: i32) -> sqlx::Result<Vec<DbVerse>> {
        sqlx::query_as::<_, DbVerse>(&format!(
            r#"
            SELECT {VERSE_COLUMNS}
            FROM verses
            WHERE surah_no = $1
            ORDER BY ayah_no
            "#
        ))
        .bind(surah_no)
        .fetch_all(&self.pool)
        .await
    }

    /// Single verse by surah and ayah number
    pub async fn get_verse(&self, surah_no: i32, ayah_no: i32) -> sqlx::Result<Option<DbVerse>> {
        sqlx::query_as::<_, DbVerse>(&format!(
            r#"
            SELECT {VERSE_COLUMNS}
            FROM verses
            WHERE surah_no = $1 AND ayah_no = $2
            "#
        ))
        .bind(surah_no)
        .bind(ayah_no)
        .fetch_optional(&self.pool)
        .await
    }

    /// Number of verses in the corpus
    pub async fn count_verses(&self) -> sqlx::Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM verses")
            .fetch_one(&self.pool)
            .await
    }
}

impl VerseStore for Database {
    type Error = sqlx::Error;

    async fn scan_containing(&self, needle: &str) -> sqlx::Result<Vec<VerseRecord>> {
        let rows = self.find_verses_containing(needle).await?;
        to_verse_records(&rows)
    }

    async fn surah(&self, surah_no: u32) -> sqlx::Result<Vec<VerseRecord>> {
        let Ok(surah_no) = i32::try_from(surah_no) else {
            return Ok(Vec::new());
        };
        let rows = self.get_surah(surah_no).await?;
        to_verse_records(&rows)
    }

    async fn ayah(&self, surah_no: u32, ayah_no: u32) -> sqlx::Result<Option<VerseRecord>> {
        let (Ok(surah_no), Ok(ayah_no)) = (i32::try_from(surah_no), i32::try_from(ayah_no)) else {
            return Ok(None);
        };
        let row = self.get_verse(surah_no, ayah_no).await?;
        row.as_ref().map(to_verse_record).transpose()
    }
}

fn to_verse_record(row: &DbVerse) -> sqlx::Result<VerseRecord> {
    row.to_verse_record()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

fn to_verse_records(rows: &[DbVerse]) -> sqlx::Result<Vec<VerseRecord>> {
    rows.iter().map(to_verse_record).collect()
}
