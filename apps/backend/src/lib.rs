pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use ayah_quiz_core::QuizEngine;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, VerseSourceConfig};
use crate::db::Database;
use crate::services::corpus::load_corpus;
use crate::services::verses::VerseSource;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<QuizEngine<VerseSource>>,
    pub store_timeout: Duration,
}

impl AppState {
    pub fn new(source: VerseSource, store_timeout: Duration) -> Self {
        Self {
            engine: Arc::new(QuizEngine::new(source)),
            store_timeout,
        }
    }
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let source = match &config.verse_source {
        VerseSourceConfig::Database(database_url) => {
            tracing::info!("Connecting to database...");
            let db = Database::connect(
                database_url,
                config.db_max_connections,
                config.store_timeout,
            )
            .await?;

            tracing::info!("Running migrations...");
            db.run_migrations().await?;

            let count = db.count_verses().await?;
            tracing::info!("Verse table holds {} verses", count);
            VerseSource::Postgres(db)
        }
        VerseSourceConfig::Corpus(path) => {
            tracing::info!("Loading corpus from {}...", path.display());
            VerseSource::Memory(load_corpus(path).await?)
        }
    };
    tracing::info!("Using {} verse source", source.kind());

    let state = AppState::new(source, config.store_timeout);
    let app = build_router(state);

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/quran/search", get(routes::quran::search))
        .route(
            "/api/quran/surah/:surah_no/translation/:translator",
            get(routes::quran::surah_translation),
        )
        .route("/api/quran/ayah/:surah_no/:ayah_no", get(routes::quran::ayah))
        .route("/api/quran/autocomplete", get(routes::quran::autocomplete))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
