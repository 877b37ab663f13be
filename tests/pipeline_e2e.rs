// tests/pipeline_e2e.rs
//
// Whole-pipeline runs against a temp NDJSON corpus and an in-memory store:
// per-stage counts, persisted-table contents, idempotent re-runs, and the
// empty-after-filtering edge case.

use std::io::Write;

use news_sentiment_etl::aggregate::DEFAULT_TOP_DAYS;
use news_sentiment_etl::{pipeline, query, NewsStore, Resolution};

fn corpus(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(f, "{line}").unwrap();
    }
    f
}

const SAMPLE: &[&str] = &[
    r#"{"headline":"Good news today","category":"POLITICS","date":"2021-01-01"}"#,
    r#"{"headline":"Terrible crisis deepens","category":"POLITICS","date":"2021-01-02"}"#,
    r#"{"headline":"Quarterly zoning hearing","category":"LOCAL","date":"2021-01-02"}"#,
    r#"{"headline":"","category":"POLITICS","date":"not-a-date"}"#,
];

#[tokio::test]
async fn run_populates_all_tables() {
    let f = corpus(SAMPLE);
    let store = NewsStore::open_in_memory().await.unwrap();

    let summary = pipeline::run_with_store(f.path(), &store).await.unwrap();
    assert_eq!(summary.extracted, 4);
    assert_eq!(summary.normalized, 3);
    assert_eq!(summary.dropped, 1);
    assert_eq!(summary.categories, 2);

    let raw = store.raw_news().await.unwrap();
    assert_eq!(raw.len(), 3);

    let sentiment = store.sentiment_news().await.unwrap();
    assert_eq!(sentiment.len(), 3);

    let stats = store.category_stats().await.unwrap();
    assert_eq!(stats[0].category, "POLITICS");
    assert_eq!(stats[0].count, 2);
    let total: u64 = stats.iter().map(|s| s.count).sum();
    assert_eq!(total, 3);
}

#[tokio::test]
async fn rerun_on_unchanged_input_is_byte_identical() {
    let f = corpus(SAMPLE);
    let store = NewsStore::open_in_memory().await.unwrap();

    pipeline::run_with_store(f.path(), &store).await.unwrap();
    let raw1 = store.raw_news().await.unwrap();
    let sent1 = store.sentiment_news().await.unwrap();
    let cat1 = store.category_stats().await.unwrap();
    let trend1 = store.trend_counts().await.unwrap();

    pipeline::run_with_store(f.path(), &store).await.unwrap();
    assert_eq!(store.raw_news().await.unwrap(), raw1);
    assert_eq!(store.sentiment_news().await.unwrap(), sent1);
    assert_eq!(store.category_stats().await.unwrap(), cat1);
    assert_eq!(store.trend_counts().await.unwrap(), trend1);
}

#[tokio::test]
async fn empty_corpus_after_filtering_gives_empty_tables_not_errors() {
    let f = corpus(&[r#"{"headline":"x","category":"TECH","date":"junk"}"#]);
    let store = NewsStore::open_in_memory().await.unwrap();

    let summary = pipeline::run_with_store(f.path(), &store).await.unwrap();
    assert_eq!(summary.normalized, 0);

    assert!(store.raw_news().await.unwrap().is_empty());
    assert!(store.category_stats().await.unwrap().is_empty());
    assert!(query::trend(&store, None, Resolution::Monthly)
        .await
        .unwrap()
        .is_empty());
    assert!(query::busiest_days(&store, None, DEFAULT_TOP_DAYS)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn run_against_on_disk_store_is_retryable() {
    let f = corpus(SAMPLE);
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("news.db");

    let store = NewsStore::open(&db_path).await.unwrap();
    pipeline::run_with_store(f.path(), &store).await.unwrap();
    let first = store.raw_news().await.unwrap();

    // A "retry" opens the store fresh, as a re-invoked batch job would.
    let store2 = NewsStore::open(&db_path).await.unwrap();
    pipeline::run_with_store(f.path(), &store2).await.unwrap();
    assert_eq!(store2.raw_news().await.unwrap(), first);
}

#[tokio::test]
async fn missing_input_file_fails_the_run() {
    let store = NewsStore::open_in_memory().await.unwrap();
    let res = pipeline::run_with_store(std::path::Path::new("/no/such/corpus.json"), &store).await;
    assert!(res.is_err());
}
