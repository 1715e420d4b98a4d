//! PostgreSQL-backed verse store tests.
//!
//! Run with: cargo test -- --ignored

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use ayah_quiz_core::VerseStore;
use common::fixtures::{self, TEST_SURAH};
use common::TestContext;

/// Test the database store scans and orders verses.
#[tokio::test]
#[ignore = "requires database"]
async fn test_database_scan_containing() {
    let ctx = TestContext::with_database().await;
    ctx.cleanup_surah(TEST_SURAH).await;
    ctx.seed_verses(&fixtures::test_surah_verses()).await;

    let db = ctx.db.as_ref().unwrap();
    let found = db.scan_containing("كتب").await.unwrap();
    let ours: Vec<_> = found.iter().filter(|v| v.surah_no == TEST_SURAH).collect();
    assert_eq!(ours.len(), 1);
    assert_eq!(ours[0].ayah_no, 2);

    let surah = db.surah(TEST_SURAH).await.unwrap();
    assert_eq!(surah.iter().map(|v| v.ayah_no).collect::<Vec<_>>(), vec![1, 2, 3]);

    assert!(db.ayah(TEST_SURAH, 4).await.unwrap().is_none());

    ctx.cleanup_surah(TEST_SURAH).await;
}

/// Test search against the database-backed store.
#[tokio::test]
#[ignore = "requires database"]
async fn test_database_search() {
    let ctx = TestContext::with_database().await;
    ctx.cleanup_surah(TEST_SURAH).await;
    ctx.seed_verses(&fixtures::test_surah_verses()).await;
    let server = ctx.server();

    let response = server
        .get(&format!("/api/quran/surah/{}/translation/farhat_hashmi", TEST_SURAH))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["ayahs"].as_array().unwrap().len(), 3);

    let response = server
        .get(&format!("/api/quran/ayah/{}/2", TEST_SURAH))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["translation"][1]["meaning"], "and wrote");

    let response = server
        .get("/api/quran/search")
        .add_query_param("searchWord", "بالقلم")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["WordsAndMeanings"][0]["meaning"], "by the pen");

    let response = server
        .get(&format!("/api/quran/ayah/{}/9", TEST_SURAH))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    ctx.cleanup_surah(TEST_SURAH).await;
}
