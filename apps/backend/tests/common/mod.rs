//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext backed by the bundled sample corpus (no external services)
//! - TestContext backed by PostgreSQL for the database-backed store
//!
//! # Requirements
//! Database tests require a PostgreSQL database (set DATABASE_URL env var).

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum_test::TestServer;

use ayah_quiz_backend::db::Database;
use ayah_quiz_backend::models::VerseRecord;
use ayah_quiz_backend::services::corpus::parse_corpus;
use ayah_quiz_backend::services::verses::VerseSource;
use ayah_quiz_backend::{build_router, AppState};
use ayah_quiz_core::MemoryVerseStore;

const TEST_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Test context containing the router under test.
pub struct TestContext {
    pub db: Option<Arc<Database>>,
    app: Router,
}

impl TestContext {
    /// Create a context serving the bundled sample corpus.
    pub fn new() -> Self {
        let store = parse_corpus(fixtures::SAMPLE_CORPUS).expect("sample corpus parses");
        Self::with_source(VerseSource::Memory(store))
    }

    /// Create a context serving the given verses from memory.
    pub fn with_verses(verses: Vec<VerseRecord>) -> Self {
        Self::with_source(VerseSource::Memory(MemoryVerseStore::new(verses)))
    }

    /// Create a context backed by PostgreSQL.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn with_database() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url, 5, TEST_STORE_TIMEOUT)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(VerseSource::Postgres(db.clone()), TEST_STORE_TIMEOUT);
        Self {
            db: Some(Arc::new(db)),
            app: build_router(state),
        }
    }

    fn with_source(source: VerseSource) -> Self {
        let state = AppState::new(source, TEST_STORE_TIMEOUT);
        Self {
            db: None,
            app: build_router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server for this context.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }

    /// Insert verses into the test database.
    pub async fn seed_verses(&self, verses: &[VerseRecord]) {
        let db = self.db.as_ref().expect("database context required");
        for verse in verses {
            sqlx::query(
                r#"
                INSERT INTO verses (surah_no, ayah_no, arabic_with_diacritics, arabic_no_diacritics,
                                    tarjuma_lafzi_farhat_hashmi)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (surah_no, ayah_no) DO UPDATE SET
                    arabic_with_diacritics = EXCLUDED.arabic_with_diacritics,
                    arabic_no_diacritics = EXCLUDED.arabic_no_diacritics,
                    tarjuma_lafzi_farhat_hashmi = EXCLUDED.tarjuma_lafzi_farhat_hashmi
                "#,
            )
            .bind(verse.surah_no as i32)
            .bind(verse.ayah_no as i32)
            .bind(&verse.arabic_with_diacritics)
            .bind(&verse.arabic_no_diacritics)
            .bind(fixtures::column_text(verse))
            .execute(db.pool())
            .await
            .expect("Failed to seed verse");
        }
    }

    /// Remove a test surah from the database.
    pub async fn cleanup_surah(&self, surah_no: u32) {
        if let Some(db) = &self.db {
            let _ = sqlx::query("DELETE FROM verses WHERE surah_no = $1")
                .bind(surah_no as i32)
                .execute(db.pool())
                .await;
        }
    }
}
